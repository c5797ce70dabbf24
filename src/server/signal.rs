// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)

use std::sync::Arc;
use tokio::sync::Notify;

/// Signal handler state
pub struct SignalHandler {
    /// Woken once when a shutdown signal arrives
    pub shutdown: Arc<Notify>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Wake the server loop
    ///
    /// `notify_one` keeps a permit, so a loop that is not parked on the
    /// notification yet still sees it.
    pub fn request_shutdown(&self) {
        self.shutdown.notify_one();
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start signal handlers (Unix)
///
/// Handlers are registered before this returns, so registration failures
/// surface at startup.
#[cfg(unix)]
pub fn start_signal_handler(handler: Arc<SignalHandler>) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        let name = tokio::select! {
            _ = sigterm.recv() => "SIGTERM",
            _ = sigint.recv() => "SIGINT",
        };
        crate::logger::log_info(&format!("{name} received, shutting down"));
        handler.request_shutdown();
    });

    Ok(())
}

/// Fallback for non-Unix targets - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>) -> std::io::Result<()> {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            crate::logger::log_info("Ctrl+C received, shutting down");
            handler.request_shutdown();
        }
    });

    Ok(())
}
