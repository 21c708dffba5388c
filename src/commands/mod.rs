//! Command handlers for the msio CLI.
//!
//! Each submodule handles one CLI command. The main dispatch logic remains in main.rs.

pub mod ask;
pub mod list;
pub mod say;
pub mod session;

use std::path::Path;

use anyhow::{Context, Result};
use ratatui::style::Color;

use msio::cli::PlainMode;
use msio::config::parse_color_override;
use msio::{ConsoleConfig, Environment, IoServer, OutputHandle};

/// Build the server for this process.
///
/// Plain mode binds output to a second handle over stdout. Being a different
/// handle from the native one, it counts as redirected.
pub fn build_server(palette: Option<&Path>, plain: PlainMode) -> Result<IoServer> {
    let config = match palette {
        Some(path) => ConsoleConfig::load(path)
            .with_context(|| format!("Failed to load palette: {}", path.display()))?,
        None => ConsoleConfig::default(),
    };
    let mut server = config.into_server(Environment::process())?;
    if use_plain(plain) {
        server.set_output(OutputHandle::stdout());
    }
    Ok(server)
}

fn use_plain(mode: PlainMode) -> bool {
    match mode {
        PlainMode::Always => true,
        PlainMode::Never => false,
        PlainMode::Auto => !atty::is(atty::Stream::Stdout),
    }
}

/// Parse an optional `--color` argument.
pub fn color_arg(value: Option<&str>) -> Result<Option<Color>> {
    let color = value.map(parse_color_override).transpose()?.flatten();
    Ok(color)
}
