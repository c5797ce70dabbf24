//! Extraction of the `file` part from a `multipart/form-data` body.

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};

use super::error::UploadError;

/// Form field carrying the uploaded file
pub const FILE_FIELD: &str = "file";

/// The file part of an upload, fully buffered
#[derive(Debug)]
pub struct FilePart {
    pub file_name: String,
    pub data: Bytes,
}

/// Read the first part named `file` into memory
///
/// Parts before it are skipped; parts after it are never read. The whole
/// payload is buffered before any size check can happen.
pub async fn read_file_field<B>(body: B, content_type: &str) -> Result<FilePart, UploadError>
where
    B: Body<Data = Bytes> + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>> + 'static,
{
    let boundary = multer::parse_boundary(content_type)?;
    let mut multipart = multer::Multipart::new(body.into_data_stream(), boundary);

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or(UploadError::NoFilename)?;
        let data = field.bytes().await?;

        return Ok(FilePart { file_name, data });
    }

    Err(UploadError::NoFileField)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Full;

    const BOUNDARY: &str = "X-TEST-BOUNDARY";

    fn content_type() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    fn form_body(parts: &[(&str, Option<&str>, &[u8])]) -> Full<Bytes> {
        let mut out = Vec::new();
        for (name, file_name, data) in parts {
            out.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            let disposition = match file_name {
                Some(f) => format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\n"),
                None => format!("Content-Disposition: form-data; name=\"{name}\"\r\n"),
            };
            out.extend_from_slice(disposition.as_bytes());
            out.extend_from_slice(b"\r\n");
            out.extend_from_slice(data);
            out.extend_from_slice(b"\r\n");
        }
        out.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        Full::new(Bytes::from(out))
    }

    #[tokio::test]
    async fn test_finds_file_after_other_fields() {
        let body = form_body(&[
            ("title", None, &b"Town hall"[..]),
            ("file", Some("clip.mp4"), &b"\x00\x01binary\r\n\xff"[..]),
        ]);
        let part = read_file_field(body, &content_type()).await.unwrap();
        assert_eq!(part.file_name, "clip.mp4");
        assert_eq!(&part.data[..], &b"\x00\x01binary\r\n\xff"[..]);
    }

    #[tokio::test]
    async fn test_missing_file_field() {
        let body = form_body(&[("title", None, &b"Town hall"[..])]);
        let err = read_file_field(body, &content_type()).await.unwrap_err();
        assert_eq!(err, UploadError::NoFileField);
    }

    #[tokio::test]
    async fn test_file_field_without_filename() {
        let body = form_body(&[("file", None, &b"data"[..])]);
        let err = read_file_field(body, &content_type()).await.unwrap_err();
        assert_eq!(err, UploadError::NoFilename);

        let body = form_body(&[("file", Some(""), &b""[..])]);
        let err = read_file_field(body, &content_type()).await.unwrap_err();
        assert_eq!(err, UploadError::NoFilename);
    }

    #[tokio::test]
    async fn test_missing_boundary_is_a_multipart_error() {
        let body = form_body(&[("file", Some("a.png"), &b"png"[..])]);
        let err = read_file_field(body, "multipart/form-data").await.unwrap_err();
        assert!(matches!(err, UploadError::Multipart(_)));
    }
}
