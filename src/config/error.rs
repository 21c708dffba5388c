//! Configuration errors.

use std::path::PathBuf;

/// Errors that can occur while loading console configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid color for `{key}`: {value:?}")]
    InvalidColor { key: String, value: String },
}
