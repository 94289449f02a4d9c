//! Colored terminal printing of rendered payloads

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::config::OutputConfig;
use super::header::{MORE_RESULTS, TRUNCATION_WARNING};

/// Print a payload to stdout, highlighting the warning and hint lines.
pub fn print_payload(payload: &str, config: &OutputConfig) -> io::Result<()> {
    let choice = if config.use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_payload(&mut stdout, payload)
}

/// Write a payload line by line to any color-capable writer.
pub fn write_payload<W: WriteColor>(out: &mut W, payload: &str) -> io::Result<()> {
    for line in payload.lines() {
        if let Some(color) = line_color(line) {
            out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
            write!(out, "{}", line)?;
            out.reset()?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

fn line_color(line: &str) -> Option<Color> {
    if line.starts_with(TRUNCATION_WARNING) {
        Some(Color::Yellow)
    } else if line.starts_with(MORE_RESULTS) {
        Some(Color::Cyan)
    } else {
        None
    }
}
