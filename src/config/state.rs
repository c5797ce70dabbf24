// Application state module
// Immutable per-process state shared by every connection

use std::path::PathBuf;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Resolved from `upload.dir` once at startup
    pub upload_dir: PathBuf,
    /// Resolved from `static_files.root` once at startup
    pub static_root: PathBuf,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let upload_dir = PathBuf::from(&config.upload.dir);
        let static_root = PathBuf::from(&config.static_files.root);

        Self {
            config,
            upload_dir,
            static_root,
        }
    }

    pub const fn access_log(&self) -> bool {
        self.config.logging.access_log
    }
}
