//! engine
//!
//! Execution context and the guard pipeline.
//!
//! # Architecture
//!
//! Every command runs through the same lifecycle:
//!
//! ```text
//! parse args -> build Context -> run guards -> command body -> side effects
//! ```
//!
//! The [`Context`] is constructed exactly once in `cli::run` from CLI
//! flags and the environment, and threaded through command handlers.
//! There is no global state; tests supply an isolated context with a
//! temporary store.
//!
//! Guard stages ([`guard`]) run strictly in order and short-circuit on
//! the first failed required stage. No side effect (no commit, no cache
//! write) happens before all required guards pass.

pub mod guard;

pub use guard::{
    run_guards, CommandContext, GuardError, LocalWorkspace, Requirements, Stage, Workspace,
};

use std::path::PathBuf;

use crate::core::storage::Store;

/// Environment variable that overrides the stored API key.
pub const ENV_API_KEY: &str = "NOTO_API_KEY";

/// Execution context for commands.
///
/// Built once at process start; carries global settings and the
/// configuration store handle.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Interactive mode enabled.
    pub interactive: bool,
    /// Credential from the environment, taking precedence over the
    /// stored value.
    pub api_key_override: Option<String>,
    /// Configuration store.
    pub store: Store,
}

impl Context {
    /// Effective working directory.
    pub fn cwd(&self) -> PathBuf {
        self.cwd
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}
