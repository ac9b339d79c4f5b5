//! Single-scalar persistence of the cumulative download total.
//!
//! The file holds nothing but the total in MB with two decimals, e.g. `123.45`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Directory under the user's home that holds netmeter's files.
pub const DATA_DIR: &str = "data";
pub const DATA_FILE: &str = "data_usage.txt";

/// `~/data`
pub fn data_dir() -> Result<PathBuf, StoreError> {
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR))
        .ok_or(StoreError::NoHomeDir)
}

#[derive(Clone, Debug)]
pub struct UsageStore {
    path: PathBuf,
}

impl UsageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/data/data_usage.txt`
    pub fn at_default_location() -> Result<Self, StoreError> {
        Ok(Self::new(data_dir()?.join(DATA_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }

    /// Read the persisted total. `Ok(None)` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<f64>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match contents.trim().parse::<f64>() {
            Ok(total) if total.is_finite() && total >= 0.0 => Ok(Some(total)),
            _ => Err(StoreError::Malformed {
                path: self.path.clone(),
                contents,
            }),
        }
    }

    /// Overwrite the file with `total_mb` formatted to two decimals.
    pub fn save(&self, total_mb: f64) -> Result<(), StoreError> {
        self.ensure_dir()?;
        fs::write(&self.path, format!("{:.2}", total_mb)).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
