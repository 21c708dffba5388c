//! Tests for `msio ask`

use crate::helpers::{mask_timestamps, msio, stdout_of};

#[test]
fn reports_line_read_from_stdin() {
    let output = msio().arg("ask").write_stdin("hello\n").output().unwrap();
    assert!(output.status.success());
    assert_eq!(mask_timestamps(&stdout_of(&output)), "[TS][AllOk]hello\n");
}

#[test]
fn empty_line_uses_default() {
    let output = msio()
        .args(["ask", "--default", "guest"])
        .write_stdin("\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(mask_timestamps(&stdout_of(&output)), "[TS][Info]guest\n");
}

#[test]
fn end_of_input_fails() {
    let output = msio().arg("ask").write_stdin("").output().unwrap();
    assert!(!output.status.success());
    assert_eq!(mask_timestamps(&stdout_of(&output)), "[TS][Error]no input\n");
}

#[test]
fn empty_prompt_marker_is_colored_on_terminal_path() {
    msio()
        .args(["--plain", "never", "ask", "--prompt", ""])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout("\x1b[35m>\x1b[0m\x1b[32myes\x1b[0m\n");
}

#[test]
fn own_line_prompt_is_tagged_when_plain() {
    let output = msio()
        .args(["ask", "--prompt", "", "--own-line"])
        .write_stdin("yes\n")
        .output()
        .unwrap();
    assert_eq!(
        mask_timestamps(&stdout_of(&output)),
        "[TS][Prompt]>\n[TS][AllOk]yes\n"
    );
}
