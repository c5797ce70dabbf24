// Connection handling module
// Serves one accepted TCP connection as a local task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Serve a connection in a task on the current thread.
///
/// Only the wait for request headers is timed. Once a request's headers are
/// in, its body may take as long as the client needs.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address, recorded in the access log
/// * `state` - Shared application state
/// * `conn_counter` - Active connection counter, decremented when done
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
) {
    conn_counter.fetch_add(1, Ordering::SeqCst);

    let state = Arc::clone(state);
    let conn_counter = Arc::clone(conn_counter);

    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let performance = &state.config.performance;
        let header_timeout = (performance.header_read_timeout > 0)
            .then_some(Duration::from_secs(performance.header_read_timeout));

        let mut builder = http1::Builder::new();
        builder
            .timer(TokioTimer::new())
            .keep_alive(performance.keep_alive)
            .header_read_timeout(header_timeout);

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                handler::handle_request(req, Arc::clone(&service_state), Some(peer_addr))
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}
