//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Console configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Indentation the console starts with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default)]
    pub palette: PaletteConfig,
}

/// Palette overrides; a missing key keeps the default color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_ok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_suit_info: Option<String>,
}
