// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub performance: PerformanceConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[allow(clippy::missing_const_for_fn)]
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_true")]
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_log_level() -> String {
    "info".to_string()
}

const fn default_true() -> bool {
    true
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            access_log: default_true(),
            access_log_format: default_access_log_format(),
            access_log_file: None,
            error_log_file: None,
        }
    }
}

/// Connection handling
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    /// Serve further requests on the same HTTP/1.1 connection
    #[serde(default = "default_true")]
    pub keep_alive: bool,
    /// Seconds allowed for a request's headers to arrive, idle keep-alive
    /// time included; `0` disables it. Bodies are never timed.
    #[serde(default = "default_header_read_timeout")]
    pub header_read_timeout: u64,
}

const fn default_header_read_timeout() -> u64 {
    30
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            keep_alive: default_true(),
            header_read_timeout: default_header_read_timeout(),
        }
    }
}

/// Static asset configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    /// Directory request paths are resolved against
    #[serde(default = "default_static_root")]
    pub root: String,
    /// Served for `GET /`
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_static_root() -> String {
    ".".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_index_file() -> String {
    "index.html".to_string()
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: default_static_root(),
            index_file: default_index_file(),
        }
    }
}

/// Upload endpoint configuration
#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    /// Request path accepting `POST` uploads
    #[serde(default = "default_upload_endpoint")]
    pub endpoint: String,
    /// Directory accepted files are written to
    #[serde(default = "default_upload_dir")]
    pub dir: String,
    /// Largest accepted file, in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

#[allow(clippy::missing_const_for_fn)]
fn default_upload_endpoint() -> String {
    "/upload-handler.php".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_upload_dir() -> String {
    "uploads".to_string()
}

const fn default_max_file_size() -> u64 {
    50 * 1024 * 1024
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: default_upload_endpoint(),
            dir: default_upload_dir(),
            max_file_size: default_max_file_size(),
        }
    }
}
