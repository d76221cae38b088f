//! ui::clipboard
//!
//! Clipboard access via the platform's clipboard utility.
//!
//! # Design
//!
//! Text is piped to the first available utility for the platform:
//! `pbcopy` on macOS, `clip` on Windows, and `wl-copy`, `xclip`, or
//! `xsel` on Linux. Copy failures are soft: commands report them and
//! continue, since the clipboard is a convenience, not a correctness
//! concern.

use std::io::Write;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors from clipboard operations.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard utility available")]
    Unavailable,

    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Candidate utilities per platform, tried in order.
fn candidates() -> &'static [(&'static str, &'static [&'static str])] {
    if cfg!(target_os = "macos") {
        &[("pbcopy", &[])]
    } else if cfg!(target_os = "windows") {
        &[("clip", &[])]
    } else {
        &[
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ]
    }
}

/// Copy `text` to the system clipboard.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    for (program, args) in candidates() {
        let child = Command::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match child {
            Ok(child) => child,
            // Utility not installed: try the next one.
            Err(_) => continue,
        };

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        if status.success() {
            return Ok(());
        }
    }
    Err(ClipboardError::Unavailable)
}
