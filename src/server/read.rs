//! Read protocol
//!
//! A single general line read ([`IoServer::read_line_with`]) plus the
//! narrower convenience forms built on it.

use std::io;

use ratatui::style::Color;
use tracing::debug;

use super::IoServer;
use crate::theme::OutputType;

/// Outcome of a line read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    /// A non-empty line, exactly as entered minus its line terminator.
    Line(String),
    /// An empty line was entered; carries the caller's default, if any.
    Default(Option<String>),
    /// The input stream is exhausted.
    EndOfInput,
}

impl LineInput {
    /// The resulting value: the line, the default, or `None`.
    pub fn into_value(self) -> Option<String> {
        match self {
            LineInput::Line(line) => Some(line),
            LineInput::Default(value) => value,
            LineInput::EndOfInput => None,
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, LineInput::EndOfInput)
    }
}

/// Parameters of a line read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadLineRequest {
    pub prompt: Option<String>,
    pub default_value: Option<String>,
    /// Write the prompt as its own line rather than in front of the input.
    pub prompt_on_own_line: bool,
    pub prompt_color: Option<Color>,
}

impl ReadLineRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn own_line(mut self, own_line: bool) -> Self {
        self.prompt_on_own_line = own_line;
        self
    }

    pub fn prompt_color(mut self, color: Color) -> Self {
        self.prompt_color = Some(color);
        self
    }
}

/// Strip one trailing `\n` or `\r\n`.
fn trim_line_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

impl IoServer {
    /// Read a line with no prompt and no default.
    pub fn read_line(&self) -> io::Result<LineInput> {
        self.read_line_with(&ReadLineRequest::new())
    }

    /// Read a line after `prompt`.
    pub fn read_line_prompt(&self, prompt: &str) -> io::Result<LineInput> {
        self.read_line_with(&ReadLineRequest::new().prompt(prompt))
    }

    /// Read a line after `prompt`, answering `default_value` for an empty line.
    pub fn read_line_or(&self, prompt: &str, default_value: &str) -> io::Result<LineInput> {
        self.read_line_with(
            &ReadLineRequest::new()
                .prompt(prompt)
                .default_value(default_value),
        )
    }

    /// Read one line from the input stream.
    ///
    /// The prompt marker (`prompt + ">"`) is only written when the prompt is
    /// the empty string; any other prompt is accepted but not displayed.
    pub fn read_line_with(&self, request: &ReadLineRequest) -> io::Result<LineInput> {
        // TODO: decide with the command dispatcher whether non-empty prompts should be written too.
        if let Some(prompt) = request.prompt.as_deref().filter(|p| p.is_empty()) {
            let marker = format!("{}>", prompt);
            if request.prompt_on_own_line {
                self.write_line_as(&marker, OutputType::Prompt, request.prompt_color)?;
            } else {
                self.write_as(&marker, OutputType::Prompt, request.prompt_color)?;
            }
        }

        let mut line = String::new();
        if self.input().read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(LineInput::EndOfInput);
        }
        trim_line_terminator(&mut line);

        if line.is_empty() {
            return Ok(LineInput::Default(request.default_value.clone()));
        }
        Ok(LineInput::Line(line))
    }

    /// Read the next raw byte from the input stream, `None` at end of input.
    pub fn read(&self) -> io::Result<Option<u8>> {
        self.input().read_byte()
    }
}
