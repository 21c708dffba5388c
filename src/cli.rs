//! CLI definitions for msio
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};

use crate::theme::OutputType;

/// Build clap styles using the default palette colors.
///
/// - Yellow: headers and usage (list title color)
/// - Green: literals (all-ok color)
/// - Magenta: placeholders (prompt color)
/// - Red: errors
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Magenta.on_default())
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "msio")]
#[command(about = "Mobile suit console I/O - colored, indented output with plain redirected fallback")]
#[command(long_about = "Mobile suit console I/O (msio).

Writes colored, indented lines when attached to a terminal and plain
[timestamp][label] lines once output is redirected. Reads lines with
prompt-and-default handling.

QUICK START:
    msio say --kind all-ok \"Build finished\"     Print a success line
    msio list --title Agents claude codex         Print an indented list
    msio ask --default guest                      Read a line, default on empty
    msio session                                  Interactive indentation playground")]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Palette configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// When to write plain timestamped output instead of colors
    #[arg(long, global = true, value_enum, default_value_t = PlainMode::Auto)]
    pub plain: PlainMode,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlainMode {
    /// Plain output when stdout is not a terminal
    Auto,
    /// Always plain output
    Always,
    /// Always colored output
    Never,
}

/// Output category as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Default,
    Prompt,
    Error,
    AllOk,
    ListTitle,
    CustomInfo,
    MobileSuitInfo,
}

impl From<Kind> for OutputType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Default => OutputType::Default,
            Kind::Prompt => OutputType::Prompt,
            Kind::Error => OutputType::Error,
            Kind::AllOk => OutputType::AllOk,
            Kind::ListTitle => OutputType::ListTitle,
            Kind::CustomInfo => OutputType::CustomInfo,
            Kind::MobileSuitInfo => OutputType::MobileSuitInfo,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a line of text
    #[command(long_about = "Write TEXT as one line of the given kind.

On a terminal the line is colored by kind (or --color). When plain, it is
written as [timestamp][label]TEXT.

EXAMPLES:
    msio say hello
    msio say --kind error \"disk full\"
    msio say --color \"#ff8800\" custom
    msio say --no-newline --kind prompt \"name>\"")]
    Say {
        /// Text to write
        text: String,
        /// Output kind
        #[arg(long, short, value_enum, default_value_t = Kind::Default)]
        kind: Kind,
        /// Color override (name, #rrggbb or 0-255)
        #[arg(long, short)]
        color: Option<String>,
        /// Do not end the line
        #[arg(long)]
        no_newline: bool,
    },

    /// Read one line from standard input
    #[command(long_about = "Read one line from standard input and report it.

An empty line answers --default. End of input is reported as an error line
and a non-zero exit code.

EXAMPLES:
    echo hello | msio ask
    echo | msio ask --default guest
    msio ask --prompt \"\" --own-line")]
    Ask {
        /// Prompt text (only the empty prompt writes a `>` marker)
        #[arg(long, short)]
        prompt: Option<String>,
        /// Value returned for an empty line
        #[arg(long, short)]
        default: Option<String>,
        /// Write the prompt on its own line
        #[arg(long)]
        own_line: bool,
        /// Prompt color override
        #[arg(long, short)]
        color: Option<String>,
    },

    /// Write a titled, indented list
    List {
        /// List title
        #[arg(long, short)]
        title: String,
        /// Indentation used for the items (default: tab)
        #[arg(long, allow_hyphen_values = true)]
        indent: Option<String>,
        /// Items to list
        items: Vec<String>,
    },

    /// Interactive session: echo lines and adjust indentation
    #[command(long_about = "Interactive session reading commands from standard input.

COMMANDS:
    push [TEXT]    Indent one level (tab when TEXT is omitted)
    pop            Remove the last indentation level
    set TEXT       Replace the indentation
    quit           End the session

Any other line is echoed back. The session ends at end of input.")]
    Session,
}
