//! Write protocols
//!
//! Interactive output is `color + [prefix] + content + reset`.
//! Redirected output drops every escape byte and tags lines with
//! `[timestamp]label` instead.

use std::io;

use ratatui::style::Color;
use tracing::trace;

use super::IoServer;
use crate::theme::{color_to_ansi, paint, OutputType, ANSI_RESET};

/// One run of text in a multi-colored line.
///
/// A segment without a color takes the line's resolved category color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub color: Option<Color>,
}

impl Segment {
    /// Segment in the line's default color.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    /// Segment with its own color.
    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

impl From<&str> for Segment {
    fn from(text: &str) -> Self {
        Segment::plain(text)
    }
}

impl From<String> for Segment {
    fn from(text: String) -> Self {
        Segment::plain(text)
    }
}

impl<T: Into<String>> From<(T, Option<Color>)> for Segment {
    fn from((text, color): (T, Option<Color>)) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

impl IoServer {
    /// Write `content` with the default category, no newline.
    pub fn write(&self, content: &str) -> io::Result<()> {
        self.write_as(content, OutputType::Default, None)
    }

    /// Write `content` with category `ty`, no newline.
    pub fn write_typed(&self, content: &str, ty: OutputType) -> io::Result<()> {
        self.write_as(content, ty, None)
    }

    /// Write `content` without a newline.
    ///
    /// On a terminal the text is colored but not indented. When redirected,
    /// only the bare content is written, and prompts are dropped entirely.
    pub fn write_as(
        &self,
        content: &str,
        ty: OutputType,
        custom_color: Option<Color>,
    ) -> io::Result<()> {
        if !self.is_output_redirected() {
            let color = self.resolve_color(ty, custom_color);
            return self.output().emit(&paint(color, content));
        }
        if ty == OutputType::Prompt {
            trace!("prompt suppressed on redirected output");
            return Ok(());
        }
        self.output().emit(content)
    }

    /// Write an empty default line.
    pub fn write_empty_line(&self) -> io::Result<()> {
        self.write_line_as("", OutputType::Default, None)
    }

    /// Write `content` as a default line.
    pub fn write_line(&self, content: &str) -> io::Result<()> {
        self.write_line_as(content, OutputType::Default, None)
    }

    /// Write `content` as a line of category `ty`.
    pub fn write_line_typed(&self, content: &str, ty: OutputType) -> io::Result<()> {
        self.write_line_as(content, ty, None)
    }

    /// Write `content` followed by a newline.
    ///
    /// On a terminal: `color + prefix + content + reset`. When redirected:
    /// `[timestamp]label + content`.
    pub fn write_line_as(
        &self,
        content: &str,
        ty: OutputType,
        custom_color: Option<Color>,
    ) -> io::Result<()> {
        let redirected = self.is_output_redirected();
        trace!(?ty, redirected, "write line");
        let text = if redirected {
            format!("[{}]{}{}\n", self.timestamp(), ty.label(), content)
        } else {
            let color = self.resolve_color(ty, custom_color);
            format!(
                "{}{}{}{}\n",
                color_to_ansi(color),
                self.prefix(),
                content,
                ANSI_RESET
            )
        };
        self.output().emit(&text)
    }

    /// Write one logical line assembled from differently colored segments.
    ///
    /// On a terminal the prefix is written once in the category color, then
    /// each segment in its own color, then a newline. When redirected the
    /// segment texts are concatenated and followed by the `[timestamp]label`
    /// tag, with no newline.
    pub fn write_segments(&self, segments: &[Segment], ty: OutputType) -> io::Result<()> {
        let redirected = self.is_output_redirected();
        trace!(?ty, redirected, segments = segments.len(), "write segments");
        let mut text = String::new();
        if redirected {
            for segment in segments {
                text.push_str(&segment.text);
            }
            text.push('[');
            text.push_str(&self.timestamp());
            text.push(']');
            text.push_str(ty.label());
        } else {
            let default_color = self.resolve_color(ty, None);
            text.push_str(&color_to_ansi(default_color));
            text.push_str(self.prefix());
            text.push_str(ANSI_RESET);
            for segment in segments {
                let color = segment.color.unwrap_or(default_color);
                text.push_str(&color_to_ansi(color));
                text.push_str(&segment.text);
                text.push_str(ANSI_RESET);
            }
            text.push('\n');
        }
        self.output().emit(&text)
    }
}
