//! cli::commands
//!
//! Command handlers.
//!
//! Each handler takes the execution context and its parsed arguments,
//! runs its guard requirements, and performs the command body. Handlers
//! return `anyhow::Error` for anything that should abort with exit
//! code 1; cancelled prompts are mapped to short "nothing ..." messages
//! here rather than surfacing the raw prompt error.

mod branch;
mod checkout;
mod completion;
mod config_cmd;
mod generate;
mod init;
mod prev;

use anyhow::Result;

use crate::engine::Context;
use crate::ui::PromptError;

use super::args::{Cli, Command};

/// Dispatch the parsed command line to its handler.
pub fn dispatch(cli: Cli, ctx: &Context) -> Result<()> {
    match cli.command {
        None => generate::run(ctx, &cli.generate),
        Some(Command::Prev {
            copy,
            apply,
            edit,
            amend,
        }) => prev::run(ctx, copy, apply, edit, amend),
        Some(Command::Init { root, generate }) => init::run(ctx, root, generate),
        Some(Command::Checkout {
            branch,
            create,
            copy,
        }) => checkout::run(ctx, branch.as_deref(), create, copy),
        Some(Command::Branch { remote }) => branch::run(ctx, remote),
        Some(Command::Config { action }) => config_cmd::run(ctx, action),
        Some(Command::Completion { shell }) => completion::run(shell),
    }
}

/// Map a prompt failure to the user-facing abort message.
///
/// `cancelled` is shown when the user bails out of the prompt; prompts
/// in non-interactive mode report the missing input instead.
fn prompt_failure(err: PromptError, cancelled: &str) -> anyhow::Error {
    match err {
        PromptError::Cancelled => anyhow::anyhow!("{}", cancelled),
        PromptError::NotInteractive => {
            anyhow::anyhow!("interactive input required.\nre-run without --no-interactive or --quiet.")
        }
        PromptError::IoError(detail) => anyhow::anyhow!("prompt failed: {}", detail),
    }
}
