//! netmeter settings, read from `~/data/netmeter.toml` if present.
//!
//! ```toml
//! log_level = "debug"
//! log_dir = "/tmp/netmeter-logs"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "netmeter.toml";
const LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `tracing` filter directive, e.g. `info` or `netmeter=debug`.
    pub log_level: String,
    /// Where rolling log files go. Defaults to `<data dir>/logs`.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Load from `path`, returning defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Ok(toml::from_str(&content)?)
    }

    pub fn log_dir_or_default(&self, data_dir: &Path) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| data_dir.join(LOG_DIR))
    }
}
