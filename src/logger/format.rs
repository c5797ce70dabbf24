//! Access log format module
//!
//! Supports multiple log formats:
//! - `combined` (Apache/Nginx combined format)
//! - `common` (Common Log Format - CLF)
//! - `json` (one JSON object per line)
//! - Custom patterns with `$variable` substitution

use chrono::{DateTime, Local};
use std::net::SocketAddr;

const CLF_TIME: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Access log entry containing all request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: DateTime<Local>,
    pub method: String,
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    pub http_version: String,
    pub status: u16,
    pub body_bytes: usize,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    /// Request processing time in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry stamped with the current time
    pub fn new(remote_addr: Option<SocketAddr>, method: &str, path: &str) -> Self {
        Self {
            remote_addr: remote_addr.map_or_else(|| "-".to_string(), |a| a.ip().to_string()),
            time: Local::now(),
            method: method.to_string(),
            path: path.to_string(),
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
            request_time_us: 0,
        }
    }

    /// Format the log entry according to the specified format
    pub fn format(&self, format: &str) -> String {
        match format {
            "combined" => format!(
                "{} \"{}\" \"{}\"",
                self.format_common(),
                self.referer.as_deref().unwrap_or("-"),
                self.user_agent.as_deref().unwrap_or("-"),
            ),
            "common" => self.format_common(),
            "json" => self.format_json(),
            custom => self.format_custom(custom),
        }
    }

    fn request_uri(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{q}", self.path),
            None => self.path.clone(),
        }
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time.format(CLF_TIME),
            self.method,
            self.request_uri(),
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }

    fn format_json(&self) -> String {
        serde_json::json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "http_version": self.http_version,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "referer": self.referer,
            "user_agent": self.user_agent,
            "request_time_us": self.request_time_us,
        })
        .to_string()
    }

    /// Custom format with variable substitution
    ///
    /// Supported variables: `$remote_addr`, `$time_local`, `$time_iso8601`,
    /// `$request_time`, `$request_method`, `$request_uri`, `$request`,
    /// `$status`, `$body_bytes_sent`, `$http_referer`, `$http_user_agent`.
    fn format_custom(&self, pattern: &str) -> String {
        let request_uri = self.request_uri();
        let request_line = format!("{} {} HTTP/{}", self.method, request_uri, self.http_version);
        #[allow(clippy::cast_precision_loss)]
        let request_time = self.request_time_us as f64 / 1_000_000.0;

        // Longer names first: $request_time and $request_uri before $request
        let substitutions = [
            ("$remote_addr", self.remote_addr.clone()),
            ("$time_local", self.time.format(CLF_TIME).to_string()),
            ("$time_iso8601", self.time.to_rfc3339()),
            ("$request_time", format!("{request_time:.3}")),
            ("$request_method", self.method.clone()),
            ("$request_uri", request_uri),
            ("$request", request_line),
            ("$status", self.status.to_string()),
            ("$body_bytes_sent", self.body_bytes.to_string()),
            ("$http_referer", self.referer.clone().unwrap_or_else(|| "-".to_string())),
            ("$http_user_agent", self.user_agent.clone().unwrap_or_else(|| "-".to_string())),
        ];

        substitutions
            .iter()
            .fold(pattern.to_string(), |acc, (var, value)| acc.replace(var, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let addr: SocketAddr = "192.168.1.1:50000".parse().unwrap();
        let mut entry = AccessLogEntry::new(Some(addr), "POST", "/upload-handler.php");
        entry.query = Some("v=2".to_string());
        entry.status = 200;
        entry.body_bytes = 87;
        entry.referer = Some("https://example.com/admin.html".to_string());
        entry.user_agent = Some("Mozilla/5.0".to_string());
        entry.request_time_us = 1_250_000;
        entry
    }

    #[test]
    fn test_format_combined() {
        let log = create_test_entry().format("combined");
        assert!(log.starts_with("192.168.1.1 - - ["));
        assert!(log.contains("\"POST /upload-handler.php?v=2 HTTP/1.1\" 200 87"));
        assert!(log.contains("\"https://example.com/admin.html\""));
        assert!(log.ends_with("\"Mozilla/5.0\""));
    }

    #[test]
    fn test_format_common() {
        let log = create_test_entry().format("common");
        assert!(log.contains("\"POST /upload-handler.php?v=2 HTTP/1.1\" 200 87"));
        assert!(!log.contains("Mozilla"));
    }

    #[test]
    fn test_format_json() {
        let log = create_test_entry().format("json");
        let value: serde_json::Value = serde_json::from_str(&log).unwrap();
        assert_eq!(value["remote_addr"], "192.168.1.1");
        assert_eq!(value["method"], "POST");
        assert_eq!(value["status"], 200);
        assert_eq!(value["body_bytes"], 87);
        assert_eq!(value["query"], "v=2");
    }

    #[test]
    fn test_format_custom() {
        let log = create_test_entry().format("$request_method $request_uri -> $status in $request_time");
        assert_eq!(log, "POST /upload-handler.php?v=2 -> 200 in 1.250");
    }

    #[test]
    fn test_missing_peer_address() {
        let entry = AccessLogEntry::new(None, "GET", "/");
        assert!(entry.format("common").starts_with("- - - ["));
    }
}
