use serde::Serialize;

use super::error::UploadError;

/// Extensions (lowercase, with dot) classified as video
const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".webm", ".mov", ".avi"];

/// Coarse file classification, by extension only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Video,
    Image,
}

impl FileType {
    /// Anything that is not a known video extension counts as an image,
    /// including files that are neither.
    pub fn from_extension(extension: &str) -> Self {
        if VIDEO_EXTENSIONS.contains(&extension) {
            Self::Video
        } else {
            Self::Image
        }
    }
}

/// A file written to the upload directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Name as sent by the client
    pub original_name: String,
    /// Generated name under the upload directory
    pub file_name: String,
    pub size: usize,
    pub file_type: FileType,
}

/// JSON body returned by the upload endpoint
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub success: bool,
    pub message: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
}

impl From<Result<StoredFile, UploadError>> for UploadResult {
    fn from(outcome: Result<StoredFile, UploadError>) -> Self {
        match outcome {
            Ok(stored) => Self {
                success: true,
                message: String::new(),
                file_name: stored.file_name,
                file_size: Some(stored.size),
                file_type: Some(stored.file_type),
            },
            Err(err) => Self {
                success: false,
                message: err.to_string(),
                file_name: String::new(),
                file_size: None,
                file_type: None,
            },
        }
    }
}
