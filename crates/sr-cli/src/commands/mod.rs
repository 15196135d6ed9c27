pub mod play;
pub mod ranges;
pub mod tui;

use std::fmt::Display;
use std::io::{BufRead, Write};

/// Write one line of output.
fn say(out: &mut impl Write, text: impl Display) -> Result<(), String> {
    writeln!(out, "{text}").map_err(|e| e.to_string())
}

/// Write a prompt without a newline and flush it.
fn ask(out: &mut impl Write, text: impl Display) -> Result<(), String> {
    write!(out, "{text}").map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())
}

/// Read one trimmed line. `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>, String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.to_string()),
    }
}
