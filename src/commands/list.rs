//! List command handler

use anyhow::Result;

use msio::{IoServer, OutputType};

/// Write a title line followed by one indented line per item.
pub fn handle(
    server: &mut IoServer,
    title: &str,
    indent: Option<&str>,
    items: &[String],
) -> Result<()> {
    server.write_line_typed(title, OutputType::ListTitle)?;
    match indent {
        Some(indent) => server.append_prefix_str(indent),
        None => server.append_prefix(),
    }
    let written = items.iter().try_for_each(|item| server.write_line(item));
    server.subtract_prefix();
    written?;
    Ok(())
}
