//! Error types for page acquisition and configuration loading.
//!
//! Selector misses are deliberately absent from this module: a query that
//! matches nothing is a normal `None`, never an error.

use std::path::PathBuf;

/// Failure to obtain a parsed page.
#[derive(Debug, thiserror::Error)]
pub enum AcquisitionError {
    /// A local snapshot could not be read as UTF-8 text.
    #[error("could not read page snapshot {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The live page and its fallback snapshot were both unusable.
    #[error("fetching {url} failed ({network}) and fallback {path:?} is unreadable: {source}")]
    Unavailable {
        url: String,
        network: String,
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failure to load a YAML configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
