//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: picks exactly one handler per
//! request and writes the access log line.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http::{self, mime};
use crate::logger::{self, AccessLogEntry};
use crate::upload;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{REFERER, USER_AGENT};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: Option<SocketAddr>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes> + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>> + 'static,
{
    let started = Instant::now();
    let entry = state
        .access_log()
        .then(|| access_entry(&req, remote_addr));

    let response = route_request(req, &state).await;

    if let Some(mut entry) = entry {
        entry.status = response.status().as_u16();
        entry.body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
            .unwrap_or(usize::MAX);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on method and path
async fn route_request<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes> + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>> + 'static,
{
    let method = req.method().clone();
    // The request target is matched whole, query string included
    let path = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path(), |pq| pq.as_str())
        .to_string();
    let is_upload_endpoint = path == state.config.upload.endpoint;

    match method {
        Method::GET if path == "/" || mime::is_asset_path(&path) => {
            static_files::serve_asset(state, &path).await
        }
        Method::GET => http::build_404_response(),
        Method::POST if is_upload_endpoint => upload::handle_upload(req, state).await,
        Method::POST => http::build_404_response(),
        Method::OPTIONS if is_upload_endpoint => http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Unsupported method: {method} {path}"));
            http::build_501_response()
        }
    }
}

fn access_entry<B>(req: &Request<B>, remote_addr: Option<SocketAddr>) -> AccessLogEntry {
    let header = |name: hyper::header::HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(remote_addr, req.method().as_str(), req.uri().path());
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = match req.version() {
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        _ => "1.1",
    }
    .to_string();
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry
}
