//! Static file serving module
//!
//! Request paths map straight onto the static root: the leading slash is
//! dropped and the rest is joined as-is. Paths are not normalized, so `..`
//! segments can reach outside the root.

use crate::config::AppState;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::Path;
use tokio::fs;

/// Serve an asset, answering 404 when it does not exist
pub async fn serve_asset(state: &AppState, path: &str) -> Response<Full<Bytes>> {
    match load_asset(&state.static_root, path, &state.config.static_files.index_file).await {
        Ok((content, content_type)) => http::build_file_response(content, content_type),
        Err(e) if e.kind() == io::ErrorKind::NotFound => http::build_file_not_found_response(),
        Err(e) => {
            logger::log_error(&format!("Failed to read asset '{path}': {e}"));
            http::build_500_response()
        }
    }
}

/// Read a whole asset and pick its content type
pub async fn load_asset(
    root: &Path,
    path: &str,
    index_file: &str,
) -> io::Result<(Vec<u8>, &'static str)> {
    let relative = path.strip_prefix('/').unwrap_or(path);
    let relative = if relative.is_empty() { index_file } else { relative };

    let file_path = root.join(relative);
    let content = fs::read(&file_path).await?;
    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Ok((content, content_type))
}
