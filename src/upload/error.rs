use thiserror::Error;

/// Every way an upload can fail
///
/// The `Display` text is exactly what clients receive in the JSON `message`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("Invalid content type")]
    InvalidContentType,

    #[error("No content received")]
    NoContent,

    #[error("No file field found")]
    NoFileField,

    #[error("No file selected")]
    NoFilename,

    #[error("File too large. Maximum size is {limit_mib}MB")]
    TooLarge { limit_mib: u64 },

    #[error("{0}")]
    Multipart(String),

    #[error("{0}")]
    Io(String),
}

impl From<std::io::Error> for UploadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<multer::Error> for UploadError {
    fn from(err: multer::Error) -> Self {
        Self::Multipart(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_messages() {
        assert_eq!(UploadError::InvalidContentType.to_string(), "Invalid content type");
        assert_eq!(UploadError::NoContent.to_string(), "No content received");
        assert_eq!(UploadError::NoFileField.to_string(), "No file field found");
        assert_eq!(UploadError::NoFilename.to_string(), "No file selected");
        assert_eq!(
            UploadError::TooLarge { limit_mib: 50 }.to_string(),
            "File too large. Maximum size is 50MB"
        );
    }

    #[test]
    fn test_io_error_keeps_detail() {
        let err: UploadError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume").into();
        assert_eq!(err.to_string(), "read-only volume");
    }
}
