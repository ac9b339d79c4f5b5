use std::path::PathBuf;

use thiserror::Error;

/// The operating system could not report network byte counters.
#[derive(Error, Debug)]
pub enum OsQueryError {
    #[error("no network interfaces reported by the operating system")]
    NoInterfaces,

    #[error("aggregate {direction} byte counter overflowed")]
    CounterOverflow { direction: &'static str },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("could not determine the user's home directory")]
    NoHomeDir,

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed usage total {contents:?} in {}", .path.display())]
    Malformed { path: PathBuf, contents: String },
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("usage tracker has not been initialized")]
    NotInitialized,

    #[error("failed to sample network counters: {0}")]
    Sample(#[from] OsQueryError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
