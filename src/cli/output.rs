//! Terminal output
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically. The one-shot
//! commands print straight to stdout; the session writes through a caller
//! supplied writer so it can be driven from tests.

use std::fmt::Display;
use std::io::Write;

use colored::Colorize;

use crate::infrastructure::{InfraError, InfraResult};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print plain output (no color, for the form and TOML)
pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}

/// Rejected session input, the loop carries on.
pub fn warning<W: Write>(out: &mut W, msg: &(impl Display + ?Sized)) -> InfraResult<()> {
    writeln!(out, "{}: {}", "Warning".yellow(), msg).map_err(write_failed)
}

/// Prompt without newline, flushed so it shows before input is read.
pub fn prompt<W: Write>(out: &mut W, prompt: &str) -> InfraResult<()> {
    write!(out, "{} ", prompt.cyan())
        .and_then(|_| out.flush())
        .map_err(write_failed)
}

/// Already formatted text, as is.
pub fn raw<W: Write>(out: &mut W, text: &str) -> InfraResult<()> {
    write!(out, "{text}").map_err(write_failed)
}

fn write_failed(e: std::io::Error) -> InfraError {
    InfraError::io("write output", e)
}
