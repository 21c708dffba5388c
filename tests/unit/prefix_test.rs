//! Unit tests for the indentation prefix stack

use msio::server::PrefixStack;

use crate::helpers::MemoryConsole;

#[test]
fn set_append_subtract_round_trip() {
    let mut console = MemoryConsole::new();
    let server = &mut console.server;
    server.set_prefix("  ");
    assert_eq!(server.prefix(), "  ");
    server.append_prefix_str("X");
    assert_eq!(server.prefix(), "  X");
    server.subtract_prefix();
    assert_eq!(server.prefix(), "  ");
}

#[test]
fn subtract_on_empty_stack_leaves_prefix_unchanged() {
    let mut console = MemoryConsole::new();
    console.server.subtract_prefix();
    console.server.subtract_prefix();
    assert_eq!(console.server.prefix(), "");
    assert_eq!(console.server.prefix_depth(), 0);
}

#[test]
fn unbalanced_appends_persist_until_set() {
    let mut console = MemoryConsole::new();
    let server = &mut console.server;
    server.append_prefix();
    server.append_prefix();
    server.append_prefix_str("> ");
    server.subtract_prefix();
    assert_eq!(server.prefix(), "\t\t");
    server.set_prefix("|");
    assert_eq!(server.prefix(), "|");
    assert_eq!(server.prefix_depth(), 1);
}

#[test]
fn stack_depth_tracks_fragments_not_characters() {
    let mut stack = PrefixStack::new();
    stack.push("long fragment ");
    stack.push("·");
    assert_eq!(stack.depth(), 2);
    stack.pop();
    assert_eq!(stack.current(), "long fragment ");
    stack.pop();
    assert!(stack.is_empty());
    assert_eq!(stack.current(), "");
}

#[test]
fn empty_fragment_still_counts_as_a_level() {
    let mut stack = PrefixStack::new();
    stack.push("a");
    stack.push("");
    stack.pop();
    assert_eq!(stack.current(), "a");
    assert_eq!(stack.depth(), 1);
}
