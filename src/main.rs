//! msio - CLI entry point

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use msio::cli::{Cli, Commands};

mod commands;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut server = commands::build_server(cli.palette.as_deref(), cli.plain)?;

    match cli.command {
        Commands::Say {
            text,
            kind,
            color,
            no_newline,
        } => commands::say::handle(&server, &text, kind, color.as_deref(), no_newline)?,
        Commands::Ask {
            prompt,
            default,
            own_line,
            color,
        } => {
            if !commands::ask::handle(&server, prompt, default, own_line, color.as_deref())? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::List {
            title,
            indent,
            items,
        } => commands::list::handle(&mut server, &title, indent.as_deref(), &items)?,
        Commands::Session => commands::session::handle(&mut server)?,
    }

    Ok(ExitCode::SUCCESS)
}
