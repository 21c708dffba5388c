//! Session command handler
//!
//! A read loop that echoes lines back and lets the user move the indentation.

use anyhow::Result;

use msio::{IoServer, LineInput, OutputType, Segment};

/// A parsed session line.
#[derive(Debug, PartialEq, Eq)]
enum SessionCommand<'a> {
    Push(Option<&'a str>),
    Pop,
    Set(&'a str),
    Quit,
    Echo(&'a str),
}

fn parse_command(line: &str) -> SessionCommand<'_> {
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line, None),
    };
    match (word, rest) {
        ("push", rest) => SessionCommand::Push(rest),
        ("pop", None) => SessionCommand::Pop,
        ("set", Some(rest)) => SessionCommand::Set(rest),
        ("quit", None) => SessionCommand::Quit,
        _ => SessionCommand::Echo(line),
    }
}

/// Run the session until `quit` or end of input.
pub fn handle(server: &mut IoServer) -> Result<()> {
    server.write_line_typed(
        "session started: push [TEXT], pop, set TEXT, quit",
        OutputType::MobileSuitInfo,
    )?;

    loop {
        let line = match server.read_line_prompt("")? {
            LineInput::Line(line) => line,
            LineInput::Default(_) => continue,
            LineInput::EndOfInput => break,
        };
        match parse_command(&line) {
            SessionCommand::Push(None) => server.append_prefix(),
            SessionCommand::Push(Some(fragment)) => server.append_prefix_str(fragment),
            SessionCommand::Pop => server.subtract_prefix(),
            SessionCommand::Set(prefix) => server.set_prefix(prefix),
            SessionCommand::Quit => break,
            SessionCommand::Echo(text) => {
                let label = server.color_setting().custom_info;
                let segments = [Segment::colored("echo: ", label), Segment::plain(text)];
                server.write_segments(&segments, OutputType::Default)?;
            }
        }
    }

    server.write_line_typed("session ended", OutputType::AllOk)?;
    Ok(())
}
