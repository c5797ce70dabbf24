//! MIME type detection module
//!
//! Only the asset types the server hands out are distinguished; everything
//! else is served as plain text.

/// Extensions routed to the static file resolver
pub const ASSET_EXTENSIONS: [&str; 3] = [".html", ".js", ".css"];

/// Get Content-Type based on file extension (without the dot)
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html") => "text/html",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        _ => "text/plain",
    }
}

/// Whether a request path names a servable asset
pub fn is_asset_path(path: &str) -> bool {
    ASSET_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_types() {
        assert_eq!(get_content_type(Some("html")), "text/html");
        assert_eq!(get_content_type(Some("css")), "text/css");
        assert_eq!(get_content_type(Some("js")), "application/javascript");
    }

    #[test]
    fn test_fallback_is_plain_text() {
        assert_eq!(get_content_type(Some("htm")), "text/plain");
        assert_eq!(get_content_type(Some("HTML")), "text/plain");
        assert_eq!(get_content_type(None), "text/plain");
    }

    #[test]
    fn test_asset_paths() {
        assert!(is_asset_path("/index.html"));
        assert!(is_asset_path("/js/video-manager.js"));
        assert!(is_asset_path("/style.css"));
        assert!(!is_asset_path("/"));
        assert!(!is_asset_path("/photo.png"));
        assert!(!is_asset_path("/index.html/"));
    }
}
