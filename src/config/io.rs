//! Configuration I/O operations

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::ConfigError;
use super::types::ConsoleConfig;

/// Parse a configuration document.
pub fn from_toml_str(contents: &str) -> Result<ConsoleConfig, ConfigError> {
    let config: ConsoleConfig = toml::from_str(contents)?;
    // Surface bad colors at load time rather than on first write.
    config.color_setting()?;
    Ok(config)
}

/// Load configuration from `path`.
pub fn load(path: &Path) -> Result<ConsoleConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = from_toml_str(&contents)?;
    debug!(path = %path.display(), "console config loaded");
    Ok(config)
}
