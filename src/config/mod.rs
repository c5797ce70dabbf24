// Configuration module entry point
// Loads layered configuration and holds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Values given on the command line, applied over every other source
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// Precedence: command line, then `SERVER_*` environment variables
    /// (`__` separates sections), then the file, then built-in defaults.
    pub fn load_from(config_path: &str, overrides: &Overrides) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SERVER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", overrides.host.clone())?
            .set_override_option("server.port", overrides.port.map(i64::from))?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Size cap shown to clients, in whole MiB rounded up
    pub const fn max_file_size_mib(&self) -> u64 {
        self.upload.max_file_size.div_ceil(1024 * 1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does-not-exist", &Overrides::default()).unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.upload.endpoint, "/upload-handler.php");
        assert_eq!(cfg.upload.dir, "uploads");
        assert_eq!(cfg.upload.max_file_size, 50 * 1024 * 1024);
        assert_eq!(cfg.static_files.index_file, "index.html");
        assert_eq!(cfg.max_file_size_mib(), 50);
    }

    #[test]
    fn test_file_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nhost = \"127.0.0.1\"\nport = 9000\n\n[upload]\ndir = \"incoming\"\nmax_file_size = 1024"
        )
        .unwrap();

        let overrides = Overrides {
            host: None,
            port: Some(9100),
        };
        let cfg = Config::load_from(path.to_str().unwrap(), &overrides).unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.upload.dir, "incoming");
        assert_eq!(cfg.upload.max_file_size, 1024);
        // a sub-MiB cap is never shown as 0MB
        assert_eq!(cfg.max_file_size_mib(), 1);
        // untouched sections keep their defaults
        assert_eq!(cfg.upload.endpoint, "/upload-handler.php");
        assert_eq!(cfg.performance.header_read_timeout, 30);
        assert!(cfg.performance.keep_alive);
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::default();
        assert_eq!(cfg.get_socket_addr().unwrap().port(), 8080);

        cfg.server.host = "not an address".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
