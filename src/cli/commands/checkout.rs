//! cli::commands::checkout
//!
//! Check out a branch, selected interactively when none is named.

use anyhow::{bail, Result};

use crate::engine::{run_guards, Context, LocalWorkspace, Requirements};
use crate::git::Git;
use crate::ui::{clipboard, output, prompts};

use super::prompt_failure;

pub fn run(ctx: &Context, branch: Option<&str>, create: bool, copy: bool) -> Result<()> {
    let workspace = LocalWorkspace::new(ctx.cwd());
    run_guards(&Requirements::REPOSITORY, ctx, &workspace)?;

    let git = Git::open(&ctx.cwd())?;
    let current = git.current_branch();

    if create {
        let Some(name) = branch else {
            bail!("--create requires a branch name.");
        };
        if git.checkout_new(name)? {
            output::success(format!("switched to new branch {}", name), ctx.quiet);
            return Ok(());
        }
        bail!("failed to create branch {}.", name);
    }

    let branches = git.branches(false)?;
    if branches.is_empty() {
        bail!("no branches found.");
    }

    let target = match branch {
        Some(name) => {
            if !branches.iter().any(|b| b == name) {
                bail!(
                    "branch {} not found.\nuse --create to create it.",
                    name
                );
            }
            name.to_string()
        }
        None => {
            let default = current
                .as_deref()
                .and_then(|c| branches.iter().position(|b| b == c));
            let index = prompts::select("select a branch", &branches, default, ctx.interactive)
                .map_err(|e| prompt_failure(e, "nothing selected!"))?;
            branches[index].clone()
        }
    };

    if copy {
        match clipboard::copy(&target) {
            Ok(()) => output::step("copied to clipboard", ctx.quiet),
            Err(err) => output::warn(format!("clipboard copy failed: {}", err), ctx.quiet),
        }
        return Ok(());
    }

    if current.as_deref() == Some(target.as_str()) {
        output::print(format!("already on {}", target), ctx.quiet);
        return Ok(());
    }

    if git.checkout(&target)? {
        output::success(format!("switched to branch {}", target), ctx.quiet);
        Ok(())
    } else {
        bail!("failed to check out {}.", target);
    }
}
