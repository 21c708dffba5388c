//! Console I/O server
//!
//! [`IoServer`] mediates every read from the input stream and every write to
//! the output stream of an interactive session. When the output stream is the
//! one the session started with, text is colored by category and indented by
//! the prefix stack. When the output stream has been swapped for another one
//! (a file, a pipe, an in-memory buffer) text is written plain, with a
//! timestamp and a category label instead of colors.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use msio::server::{IoServer, OutputHandle};
//! use msio::OutputType;
//!
//! let mut server = IoServer::default();
//! let sink = Rc::new(RefCell::new(Vec::<u8>::new()));
//! server.set_output(OutputHandle::from_shared(sink.clone()));
//! assert!(server.is_output_redirected());
//!
//! server.write_line_typed("saved", OutputType::AllOk).unwrap();
//! let text = String::from_utf8(sink.borrow().clone()).unwrap();
//! assert!(text.ends_with("[AllOk]saved\n"));
//! ```

mod prefix;
mod read;
mod stream;
mod write;

pub use prefix::PrefixStack;
pub use read::{LineInput, ReadLineRequest};
pub use stream::{Environment, InputHandle, OutputHandle};
pub use write::Segment;

use chrono::{Local, NaiveDateTime};
use ratatui::style::Color;
use tracing::trace;

use crate::theme::{ColorSetting, OutputType};

/// Source of the local time stamped on redirected lines.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Timestamp layout for redirected output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Serves the input and output of one interactive session.
#[derive(Debug)]
pub struct IoServer {
    native: Environment,
    input: InputHandle,
    output: OutputHandle,
    error: OutputHandle,
    color_setting: ColorSetting,
    prefix: PrefixStack,
    clock: Clock,
}

impl Default for IoServer {
    /// Server over the process standard streams with the default palette.
    fn default() -> Self {
        Self::new(Environment::process())
    }
}

impl IoServer {
    /// Create a server whose native streams are the ones in `env`.
    pub fn new(env: Environment) -> Self {
        Self::with_color_setting(env, ColorSetting::default())
    }

    /// Create a server with a custom palette.
    pub fn with_color_setting(env: Environment, color_setting: ColorSetting) -> Self {
        Self {
            input: env.input.clone(),
            output: env.output.clone(),
            error: env.error.clone(),
            native: env,
            color_setting,
            prefix: PrefixStack::new(),
            clock: local_now,
        }
    }

    /// Palette used by this server.
    pub fn color_setting(&self) -> &ColorSetting {
        &self.color_setting
    }

    /// Replace the clock used for redirected timestamps.
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    pub(crate) fn timestamp(&self) -> String {
        (self.clock)().format(TIMESTAMP_FORMAT).to_string()
    }

    // ------------------------------------------------------------------
    // Streams
    // ------------------------------------------------------------------

    pub fn input(&self) -> &InputHandle {
        &self.input
    }

    pub fn output(&self) -> &OutputHandle {
        &self.output
    }

    pub fn error(&self) -> &OutputHandle {
        &self.error
    }

    pub fn set_input(&mut self, input: InputHandle) {
        self.input = input;
        trace!(redirected = self.is_input_redirected(), "input rebound");
    }

    pub fn set_output(&mut self, output: OutputHandle) {
        self.output = output;
        trace!(redirected = self.is_output_redirected(), "output rebound");
    }

    pub fn set_error(&mut self, error: OutputHandle) {
        self.error = error;
        trace!(redirected = self.is_error_redirected(), "error rebound");
    }

    /// True when the input handle is not the native input stream.
    pub fn is_input_redirected(&self) -> bool {
        !self.input.same_stream(&self.native.input)
    }

    /// True when the output handle is not the native output stream.
    pub fn is_output_redirected(&self) -> bool {
        !self.output.same_stream(&self.native.output)
    }

    /// True when the error handle is not the native error stream.
    pub fn is_error_redirected(&self) -> bool {
        !self.error.same_stream(&self.native.error)
    }

    /// Rebind input to the native input stream.
    pub fn reset_input(&mut self) {
        self.set_input(self.native.input.clone());
    }

    /// Rebind output to the native output stream.
    pub fn reset_output(&mut self) {
        self.set_output(self.native.output.clone());
    }

    /// Rebind error to the native error stream.
    pub fn reset_error(&mut self) {
        self.set_error(self.native.error.clone());
    }

    // ------------------------------------------------------------------
    // Colors
    // ------------------------------------------------------------------

    /// Color for a write of category `ty`; `custom` overrides the palette.
    pub fn resolve_color(&self, ty: OutputType, custom: Option<Color>) -> Color {
        self.color_setting.resolve(ty, custom)
    }

    /// Label used for `ty` on redirected output.
    pub fn label_for(ty: OutputType) -> &'static str {
        ty.label()
    }

    // ------------------------------------------------------------------
    // Prefix
    // ------------------------------------------------------------------

    /// Indentation written ahead of interactive `write_line` output.
    pub fn prefix(&self) -> &str {
        self.prefix.current()
    }

    /// Replace the prefix with `value`.
    pub fn set_prefix(&mut self, value: &str) {
        self.prefix.set(value);
    }

    /// Indent one more level with a tab.
    pub fn append_prefix(&mut self) {
        self.prefix.push_tab();
    }

    /// Indent one more level with `fragment`.
    pub fn append_prefix_str(&mut self, fragment: &str) {
        self.prefix.push(fragment);
    }

    /// Remove the most recent indentation level, if any.
    pub fn subtract_prefix(&mut self) {
        self.prefix.pop();
    }

    /// Drop all indentation.
    pub fn clear_prefix(&mut self) {
        self.prefix.clear();
    }

    /// Number of indentation levels currently pushed.
    pub fn prefix_depth(&self) -> usize {
        self.prefix.depth()
    }
}
