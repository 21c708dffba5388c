//! Ask command handler

use anyhow::Result;

use msio::{IoServer, LineInput, OutputType, ReadLineRequest};

use super::color_arg;

/// Read one line and report what was read.
///
/// Returns `false` when the input stream was already exhausted.
pub fn handle(
    server: &IoServer,
    prompt: Option<String>,
    default: Option<String>,
    own_line: bool,
    color: Option<&str>,
) -> Result<bool> {
    let request = ReadLineRequest {
        prompt,
        default_value: default,
        prompt_on_own_line: own_line,
        prompt_color: color_arg(color)?,
    };

    match server.read_line_with(&request)? {
        LineInput::Line(line) => server.write_line_typed(&line, OutputType::AllOk)?,
        LineInput::Default(Some(value)) => {
            server.write_line_typed(&value, OutputType::CustomInfo)?
        }
        LineInput::Default(None) => server.write_empty_line()?,
        LineInput::EndOfInput => {
            server.write_line_typed("no input", OutputType::Error)?;
            return Ok(false);
        }
    }
    Ok(true)
}
