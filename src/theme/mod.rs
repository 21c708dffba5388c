//! Output categories and the color palette
//!
//! Every line written through the console belongs to an [`OutputType`].
//! The category decides the color used on a terminal (through a
//! [`ColorSetting`]) and the plain-text label used when output is redirected.

use ratatui::style::Color;

pub mod cli;

pub use cli::{ansi, color_to_ansi, paint, ANSI_RESET};

/// Semantic category of a piece of console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputType {
    /// Ordinary output
    #[default]
    Default,
    /// Text asking the user for input
    Prompt,
    /// Failure reports
    Error,
    /// Success confirmations
    AllOk,
    /// Heading of a listing
    ListTitle,
    /// Information emitted by the application
    CustomInfo,
    /// Information emitted by the framework itself
    MobileSuitInfo,
}

impl OutputType {
    /// Every category, in declaration order.
    pub const ALL: [OutputType; 7] = [
        OutputType::Default,
        OutputType::Prompt,
        OutputType::Error,
        OutputType::AllOk,
        OutputType::ListTitle,
        OutputType::CustomInfo,
        OutputType::MobileSuitInfo,
    ];

    /// Label written in front of redirected lines.
    pub fn label(self) -> &'static str {
        match self {
            OutputType::Default => "",
            OutputType::Prompt => "[Prompt]",
            OutputType::Error => "[Error]",
            OutputType::AllOk => "[AllOk]",
            OutputType::ListTitle => "[List]",
            OutputType::CustomInfo | OutputType::MobileSuitInfo => "[Info]",
        }
    }
}

/// Color palette, one entry per [`OutputType`].
///
/// Scoped to a single console instance; there is no process-wide palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSetting {
    pub default: Color,
    pub prompt: Color,
    pub error: Color,
    pub all_ok: Color,
    pub list_title: Color,
    pub custom_info: Color,
    pub mobile_suit_info: Color,
}

impl Default for ColorSetting {
    fn default() -> Self {
        Self {
            default: Color::White,
            prompt: Color::Magenta,
            error: Color::Red,
            all_ok: Color::Green,
            list_title: Color::Yellow,
            custom_info: Color::Cyan,
            mobile_suit_info: Color::Blue,
        }
    }
}

impl ColorSetting {
    /// Palette entry for a category.
    pub fn color_for(&self, ty: OutputType) -> Color {
        match ty {
            OutputType::Default => self.default,
            OutputType::Prompt => self.prompt,
            OutputType::Error => self.error,
            OutputType::AllOk => self.all_ok,
            OutputType::ListTitle => self.list_title,
            OutputType::CustomInfo => self.custom_info,
            OutputType::MobileSuitInfo => self.mobile_suit_info,
        }
    }

    /// Color actually applied to a write: the override when given, the palette otherwise.
    pub fn resolve(&self, ty: OutputType, custom: Option<Color>) -> Color {
        custom.unwrap_or_else(|| self.color_for(ty))
    }
}
