//! Console configuration
//!
//! A small TOML document customizing the palette and the starting prefix:
//!
//! ```toml
//! prefix = "  "
//!
//! [palette]
//! error = "light-red"
//! list_title = "#ffaf00"
//! ```
//!
//! The owner decides where the file lives; nothing here searches for one.

mod error;
mod io;
mod types;

pub use error::ConfigError;
pub use types::{ConsoleConfig, PaletteConfig};

use std::path::Path;
use std::str::FromStr;

use ratatui::style::Color;

use crate::server::{Environment, IoServer};
use crate::theme::ColorSetting;

impl ConsoleConfig {
    /// Parse a configuration document, validating every color.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        io::from_toml_str(contents)
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        io::load(path)
    }

    /// Palette described by this configuration.
    pub fn color_setting(&self) -> Result<ColorSetting, ConfigError> {
        let base = ColorSetting::default();
        let palette = &self.palette;
        Ok(ColorSetting {
            default: entry("default", &palette.default, base.default)?,
            prompt: entry("prompt", &palette.prompt, base.prompt)?,
            error: entry("error", &palette.error, base.error)?,
            all_ok: entry("all_ok", &palette.all_ok, base.all_ok)?,
            list_title: entry("list_title", &palette.list_title, base.list_title)?,
            custom_info: entry("custom_info", &palette.custom_info, base.custom_info)?,
            mobile_suit_info: entry(
                "mobile_suit_info",
                &palette.mobile_suit_info,
                base.mobile_suit_info,
            )?,
        })
    }

    /// Build a server over `env` with this palette and starting prefix.
    pub fn into_server(self, env: Environment) -> Result<IoServer, ConfigError> {
        let mut server = IoServer::with_color_setting(env, self.color_setting()?);
        if let Some(prefix) = &self.prefix {
            server.set_prefix(prefix);
        }
        Ok(server)
    }
}

fn entry(key: &str, value: &Option<String>, fallback: Color) -> Result<Color, ConfigError> {
    match value {
        Some(value) => parse_color(key, value),
        None => Ok(fallback),
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value.trim()).map_err(|_| ConfigError::InvalidColor {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Parse a per-call color override. The empty string means "no override".
pub fn parse_color_override(value: &str) -> Result<Option<Color>, ConfigError> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_color("color", value).map(Some)
}
