use clap::Parser;
use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;
mod upload;

/// Static asset and multipart upload server
#[derive(Parser, Debug)]
#[command(name = "upload_server", version, about)]
struct Cli {
    /// Configuration file, extension optional (missing file is fine)
    #[arg(short, long, default_value = "config")]
    config: String,

    /// Address to bind, overrides `server.host`
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides `server.port`
    #[arg(short, long)]
    port: Option<u16>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let overrides = config::Overrides {
        host: cli.host,
        port: cli.port,
    };
    let cfg = config::Config::load_from(&cli.config, &overrides)?;
    logger::init(&cfg)?;

    // Requests are handled one thread, one connection task at a time
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;
    logger::log_server_start(&listener.local_addr()?, &cfg);

    let signals = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals))?;

    let state = Arc::new(config::AppState::new(cfg));

    // LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::start_server_loop(
            listener,
            state,
            Arc::clone(&signals.shutdown),
        ))
        .await?;

    logger::log_server_stopped();
    Ok(())
}
