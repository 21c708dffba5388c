//! Mobile Suit console I/O (msio) Library
//!
//! A console facade for interactive command-line applications: colored,
//! indented output on the terminal, plain timestamped lines once a stream
//! has been redirected, and prompt-and-default line input.

pub mod cli;
pub mod config;
pub mod server;
pub mod theme;

pub use config::{ConfigError, ConsoleConfig};
pub use server::{
    Environment, InputHandle, IoServer, LineInput, OutputHandle, ReadLineRequest, Segment,
};
pub use theme::{ColorSetting, OutputType};
