//! Say command handler

use anyhow::Result;

use msio::cli::Kind;
use msio::IoServer;

use super::color_arg;

/// Write `text` as one line (or without newline) of the given kind.
pub fn handle(
    server: &IoServer,
    text: &str,
    kind: Kind,
    color: Option<&str>,
    no_newline: bool,
) -> Result<()> {
    let color = color_arg(color)?;
    if no_newline {
        server.write_as(text, kind.into(), color)?;
    } else {
        server.write_line_as(text, kind.into(), color)?;
    }
    Ok(())
}
