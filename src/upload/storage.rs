//! On-disk side of uploads: directory setup, naming and writing.

use chrono::Utc;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// Hex characters of randomness appended to the timestamp
const RANDOM_SUFFIX_LEN: usize = 8;

/// Create the upload directory (and parents) if missing, `0755` on Unix
pub async fn ensure_upload_dir(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o755);
    builder.create(dir).await
}

/// Lowercase extension of a client-supplied filename, dot included
///
/// Returns an empty string when the name has no extension.
pub fn file_extension(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// `<unix seconds>_<8 lowercase hex chars><extension>`
///
/// No collision check is made; uniqueness rests on the random suffix.
pub fn unique_file_name(extension: &str) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}{extension}",
        Utc::now().timestamp(),
        &random[..RANDOM_SUFFIX_LEN]
    )
}

/// Write the whole payload, replacing any file of the same name
pub async fn write_file(dir: &Path, file_name: &str, data: &[u8]) -> io::Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, data).await?;
    Ok(path)
}
