//! Upload endpoint
//!
//! Accepts one `multipart/form-data` file per request, stores it under a
//! generated name and reports the outcome as JSON. Every outcome, including
//! failures, is answered with HTTP 200; only the body's `success` flag
//! tells them apart.

pub mod error;
pub mod multipart;
pub mod result;
pub mod storage;

pub use error::UploadError;
pub use result::{FileType, StoredFile, UploadResult};

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE};
use hyper::{Request, Response};

use crate::config::AppState;
use crate::http;
use crate::logger;

const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Handle a `POST` to the upload endpoint
pub async fn handle_upload<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes> + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>> + 'static,
{
    let outcome = store_upload(req, state).await;
    match &outcome {
        Ok(stored) => logger::log_upload_stored(&stored.file_name, stored.size, &stored.original_name),
        Err(err) => logger::log_upload_rejected(&err.to_string()),
    }

    let result = UploadResult::from(outcome);
    let json = serde_json::to_vec(&result).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to serialize upload result: {e}"));
        br#"{"success":false,"message":"Internal server error","fileName":""}"#.to_vec()
    });

    http::build_upload_json_response(json)
}

/// Validate, parse and persist one upload
async fn store_upload<B>(req: Request<B>, state: &AppState) -> Result<StoredFile, UploadError>
where
    B: Body<Data = Bytes> + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>> + 'static,
{
    storage::ensure_upload_dir(&state.upload_dir).await?;

    let content_type = header_value(&req, CONTENT_TYPE).unwrap_or_default().to_string();
    if !content_type.starts_with(MULTIPART_FORM_DATA) {
        return Err(UploadError::InvalidContentType);
    }

    // Missing and unparsable lengths both count as zero
    let content_length = header_value(&req, CONTENT_LENGTH)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(0);
    if content_length == 0 {
        return Err(UploadError::NoContent);
    }

    let part = multipart::read_file_field(req.into_body(), &content_type).await?;

    let size = part.data.len();
    if u64::try_from(size).unwrap_or(u64::MAX) > state.config.upload.max_file_size {
        return Err(UploadError::TooLarge {
            limit_mib: state.config.max_file_size_mib(),
        });
    }

    let extension = storage::file_extension(&part.file_name);
    let file_name = storage::unique_file_name(&extension);
    storage::write_file(&state.upload_dir, &file_name, &part.data).await?;

    Ok(StoredFile {
        original_name: part.file_name,
        file_name,
        size,
        file_type: FileType::from_extension(&extension),
    })
}

fn header_value<B>(req: &Request<B>, name: hyper::header::HeaderName) -> Option<&str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}
