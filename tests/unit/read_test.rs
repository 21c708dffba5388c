//! Unit tests for the read protocol

use msio::theme::{ansi, ANSI_RESET};
use msio::{LineInput, ReadLineRequest};

use crate::helpers::{text, MemoryConsole};

#[test]
fn read_line_returns_line_verbatim() {
    let console = MemoryConsole::with_input("hello\n");
    assert_eq!(
        console.server.read_line().unwrap(),
        LineInput::Line("hello".to_string())
    );
}

#[test]
fn read_line_on_empty_stream_is_end_of_input() {
    let console = MemoryConsole::with_input("");
    let result = console.server.read_line().unwrap();
    assert!(result.is_end_of_input());
}

#[test]
fn empty_line_with_default_returns_default() {
    let console = MemoryConsole::with_input("\n");
    let request = ReadLineRequest::new().default_value("fallback");
    let result = console.server.read_line_with(&request).unwrap();
    assert_eq!(result.into_value().as_deref(), Some("fallback"));
}

#[test]
fn end_of_input_is_distinct_from_missing_default() {
    let console = MemoryConsole::with_input("\n");
    let defaulted = console.server.read_line().unwrap();
    let exhausted = console.server.read_line().unwrap();
    assert_eq!(defaulted, LineInput::Default(None));
    assert_eq!(exhausted, LineInput::EndOfInput);
    assert_ne!(defaulted, exhausted);
}

#[test]
fn default_is_not_used_for_non_empty_lines() {
    let console = MemoryConsole::with_input(" \n");
    let result = console.server.read_line_or("", "fallback").unwrap();
    assert_eq!(result, LineInput::Line(" ".to_string()));
}

#[test]
fn empty_prompt_writes_marker_before_reading() {
    let console = MemoryConsole::with_input("answer\n");
    let result = console.server.read_line_prompt("").unwrap();
    assert_eq!(result, LineInput::Line("answer".to_string()));
    assert_eq!(
        console.output_text(),
        format!("{}>{}", ansi::MAGENTA, ANSI_RESET)
    );
}

#[test]
fn named_prompt_is_not_written() {
    let console = MemoryConsole::with_input("answer\n");
    console.server.read_line_prompt("Name").unwrap();
    assert_eq!(console.output_text(), "");
}

#[test]
fn redirected_same_line_prompt_is_suppressed() {
    let mut console = MemoryConsole::with_input("x\n");
    let sink = console.redirect_output();
    console.server.read_line_prompt("").unwrap();
    assert!(text(&sink).is_empty());
}

#[test]
fn redirected_own_line_prompt_is_tagged() {
    let mut console = MemoryConsole::with_input("x\n");
    let sink = console.redirect_output();
    let request = ReadLineRequest::new().prompt("").own_line(true);
    console.server.read_line_with(&request).unwrap();
    assert_eq!(text(&sink), "[2024-01-02T03:04:05.600000][Prompt]>\n");
}

#[test]
fn reads_from_reassigned_input() {
    let mut console = MemoryConsole::with_input("native\n");
    console
        .server
        .set_input(msio::InputHandle::new(std::io::Cursor::new("other\n")));
    assert_eq!(
        console.server.read_line().unwrap().into_value().as_deref(),
        Some("other")
    );
    console.server.reset_input();
    assert_eq!(
        console.server.read_line().unwrap().into_value().as_deref(),
        Some("native")
    );
}

#[test]
fn read_returns_raw_bytes() {
    let console = MemoryConsole::with_input("é");
    assert_eq!(console.server.read().unwrap(), Some(0xC3));
    assert_eq!(console.server.read().unwrap(), Some(0xA9));
    assert_eq!(console.server.read().unwrap(), None);
}
