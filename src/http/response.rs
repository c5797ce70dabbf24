//! HTTP response building module
//!
//! Provides builders for the handful of responses the server produces,
//! decoupled from the handlers that choose them.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Methods the upload endpoint advertises to browsers
const UPLOAD_ALLOW_METHODS: &str = "POST";
const UPLOAD_ALLOW_HEADERS: &str = "Content-Type";

/// Build 404 Not Found response with an empty body
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_empty_response(StatusCode::NOT_FOUND)
}

/// Build 404 response for an asset that is missing on disk
pub fn build_file_not_found_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("File not found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("File not found")))
        })
}

/// Build 500 response for failures no handler maps to a client answer
pub fn build_500_response() -> Response<Full<Bytes>> {
    build_empty_response(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Build 501 Not Implemented response for unhandled methods
pub fn build_501_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_IMPLEMENTED)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("501 Not Implemented")))
        .unwrap_or_else(|e| {
            log_build_error("501", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 response carrying a whole file
pub fn build_file_response(data: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .body(Full::new(Bytes::from(data)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the upload endpoint's JSON answer
///
/// Always `200`: upload failures travel in the body, never in the status.
pub fn build_upload_json_response(json: Vec<u8>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", UPLOAD_ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", UPLOAD_ALLOW_HEADERS)
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build CORS preflight answer for the upload endpoint
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", "POST, OPTIONS")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", UPLOAD_ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", UPLOAD_ALLOW_HEADERS)
        .header("Access-Control-Max-Age", "86400")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

fn build_empty_response(status: StatusCode) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
