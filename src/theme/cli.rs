//! ANSI color helpers for console output
//!
//! Converts palette colors into the escape sequences written ahead of
//! interactive text, and provides the reset sequence that closes each span.

use std::borrow::Cow;

use ratatui::style::Color;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI color codes for CLI output - exposed for clap styling
pub mod ansi {
    /// White (ANSI 97) - default output
    pub const WHITE: &str = "\x1b[97m";
    /// Magenta (ANSI 35) - prompts
    pub const MAGENTA: &str = "\x1b[35m";
    /// Red (ANSI 31) - errors
    pub const RED: &str = "\x1b[31m";
    /// Green (ANSI 32) - success
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow (ANSI 33) - list titles
    pub const YELLOW: &str = "\x1b[33m";
    /// Cyan (ANSI 36) - custom information
    pub const CYAN: &str = "\x1b[36m";
    /// Blue (ANSI 34) - framework information
    pub const BLUE: &str = "\x1b[34m";
}

/// Convert a ratatui Color to an ANSI foreground escape code.
///
/// Named colors use the 16-color codes; indexed and RGB colors use the
/// 256-color and truecolor forms.
pub fn color_to_ansi(color: Color) -> Cow<'static, str> {
    let code = match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        Color::Indexed(index) => return Cow::Owned(format!("\x1b[38;5;{}m", index)),
        Color::Rgb(r, g, b) => return Cow::Owned(format!("\x1b[38;2;{};{};{}m", r, g, b)),
    };
    Cow::Borrowed(code)
}

/// Wrap `text` in the escape code for `color` and a closing reset.
pub fn paint(color: Color, text: &str) -> String {
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}
