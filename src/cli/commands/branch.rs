//! cli::commands::branch
//!
//! List branches and copy the selected name to the clipboard.
//!
//! Useful for pasting a branch name into a PR form or a chat message
//! without leaving the terminal.

use anyhow::{bail, Result};

use crate::engine::{run_guards, Context, LocalWorkspace, Requirements};
use crate::git::Git;
use crate::ui::{clipboard, output, prompts};

use super::prompt_failure;

pub fn run(ctx: &Context, remote: bool) -> Result<()> {
    let workspace = LocalWorkspace::new(ctx.cwd());
    run_guards(&Requirements::REPOSITORY, ctx, &workspace)?;

    let git = Git::open(&ctx.cwd())?;
    let branches = git.branches(remote)?;
    if branches.is_empty() {
        bail!("no branches found.");
    }

    let default = git
        .current_branch()
        .and_then(|current| branches.iter().position(|b| *b == current));
    let index = prompts::select("select a branch", &branches, default, ctx.interactive)
        .map_err(|e| prompt_failure(e, "nothing selected!"))?;
    let name = &branches[index];

    match clipboard::copy(name) {
        Ok(()) => output::success(format!("{} copied to clipboard", name), ctx.quiet),
        Err(err) => {
            // Still print the name so the copy can be done by hand.
            output::print(name, ctx.quiet);
            output::warn(format!("clipboard copy failed: {}", err), ctx.quiet);
        }
    }
    Ok(())
}
