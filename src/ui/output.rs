//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Regular output goes to stdout and respects the quiet flag; errors
//! always go to stderr. Guard failures and cancellations are rendered
//! here with their remedy hints intact.

use std::fmt::Display;

/// Print the intro banner.
pub fn intro() {
    println!();
    println!(" noto ");
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}

/// Print a step in a flow (respects quiet mode).
pub fn step(message: impl Display, quiet: bool) {
    if !quiet {
        println!("  {}", message);
    }
}

/// Print an error message (always shown).
///
/// Multi-line messages keep their line structure so remedy hints stay
/// on their own line.
pub fn error(message: impl Display) {
    for line in message.to_string().lines() {
        eprintln!("error: {}", line);
    }
}

/// Print a success message (respects quiet mode).
pub fn success(message: impl Display, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, quiet: bool) {
    if !quiet {
        eprintln!("warning: {}", message);
    }
}
