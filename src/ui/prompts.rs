//! ui::prompts
//!
//! Interactive prompts and confirmations.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! operations requiring user input must either have defaults or fail
//! with a clear error message. A user cancelling a prompt (EOF on
//! stdin) is a hard abort: callers map [`PromptError::Cancelled`] to
//! exit code 1 and never resume.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

/// Read one line from stdin; EOF is a cancellation.
fn read_line() -> Result<String, PromptError> {
    let mut line = String::new();
    let n = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| PromptError::IoError(e.to_string()))?;
    if n == 0 {
        return Err(PromptError::Cancelled);
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn flush_prompt(text: &str) -> Result<(), PromptError> {
    let mut out = io::stdout();
    write!(out, "{}", text).map_err(|e| PromptError::IoError(e.to_string()))?;
    out.flush().map_err(|e| PromptError::IoError(e.to_string()))
}

/// Prompt for confirmation (yes/no).
///
/// Returns `Ok(true)` if the user confirms, `Ok(false)` if they
/// decline. An empty answer takes `default`.
pub fn confirm(message: &str, default: bool, interactive: bool) -> Result<bool, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    flush_prompt(&format!("{} {} ", message, hint))?;
    let answer = read_line()?;
    match answer.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Ok(default),
    }
}

/// Prompt for text input, with an optional initial value shown as the
/// default. An empty answer takes the initial value when one is given.
pub fn input(
    message: &str,
    initial: Option<&str>,
    interactive: bool,
) -> Result<String, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }
    match initial {
        Some(value) => flush_prompt(&format!("{} [{}]: ", message, value))?,
        None => flush_prompt(&format!("{}: ", message))?,
    }
    let answer = read_line()?;
    if answer.is_empty() {
        if let Some(value) = initial {
            return Ok(value.to_string());
        }
    }
    Ok(answer)
}

/// Prompt to select from a list of options by number.
///
/// Returns the index of the selected option; an empty answer takes
/// `default` when given.
pub fn select<T: AsRef<str>>(
    message: &str,
    options: &[T],
    default: Option<usize>,
    interactive: bool,
) -> Result<usize, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }
    println!("{}", message);
    for (i, option) in options.iter().enumerate() {
        let marker = if Some(i) == default { "*" } else { " " };
        println!("  {} {}. {}", marker, i + 1, option.as_ref());
    }
    loop {
        flush_prompt("> ")?;
        let answer = read_line()?;
        if answer.is_empty() {
            if let Some(default) = default {
                return Ok(default);
            }
            continue;
        }
        match answer.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= options.len() => return Ok(n - 1),
            _ => println!("enter a number between 1 and {}", options.len()),
        }
    }
}

/// Prompt for masked input (e.g., API keys).
///
/// The input is not echoed to the terminal.
pub fn password(message: &str, interactive: bool) -> Result<String, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }
    rpassword::prompt_password(format!("{}: ", message))
        .map_err(|e| PromptError::IoError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_mode_rejects_all_prompts() {
        assert_eq!(
            confirm("continue?", true, false),
            Err(PromptError::NotInteractive)
        );
        assert_eq!(
            input("name", None, false),
            Err(PromptError::NotInteractive)
        );
        assert_eq!(
            select("pick", &["a", "b"], None, false),
            Err(PromptError::NotInteractive)
        );
        assert_eq!(
            password("key", false),
            Err(PromptError::NotInteractive)
        );
    }
}
