// Server loop module
// Accepts connections until shutdown is requested

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Accept loop for the application server
///
/// Must run inside a `LocalSet`: connections are served with `spawn_local`.
/// Returns once `shutdown` is notified; the listener is closed on return.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> std::io::Result<()> {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = shutdown.notified() => break,
        }
    }

    let open = active_connections.load(Ordering::SeqCst);
    if open > 0 {
        logger::log_info(&format!("Closing listener with {open} connection(s) still open"));
    }
    drop(listener);

    Ok(())
}
