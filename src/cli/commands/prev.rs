//! cli::commands::prev
//!
//! Access the last generated commit message.
//!
//! The message survives across invocations in the configuration store,
//! so a failed or abandoned run can be recovered later. Editing
//! persists the new text; amending requires an explicit edit first so
//! the user always sees what will replace the tip commit.

use anyhow::{bail, Result};

use crate::engine::{run_guards, Context, LocalWorkspace, Requirements};
use crate::generate;
use crate::git::Git;
use crate::ui::{clipboard, output, prompts};

use super::prompt_failure;

pub fn run(ctx: &Context, copy: bool, apply: bool, edit: bool, amend: bool) -> Result<()> {
    let workspace = LocalWorkspace::new(ctx.cwd());
    let guard = run_guards(&Requirements::PREV, ctx, &workspace)?;

    let mut message = match ctx.store.get().last_generated_message {
        Some(message) => message,
        None => bail!("no previous commit message found.\nrun `noto` to generate one."),
    };

    if edit {
        message = prompts::input("edit the commit message", Some(&message), ctx.interactive)
            .map_err(|e| prompt_failure(e, "nothing changed!"))?;
        if message.trim().is_empty() {
            bail!("the edited commit message is empty.");
        }
        message = message.trim().to_string();
        generate::finalize(&ctx.store, &message);
    }

    output::success(&message, ctx.quiet);
    if ctx.quiet {
        println!("{}", message);
    }

    if copy {
        match clipboard::copy(&message) {
            Ok(()) => output::step("copied to clipboard", ctx.quiet),
            Err(err) => output::warn(format!("clipboard copy failed: {}", err), ctx.quiet),
        }
    }

    if apply || amend {
        // A fresh commit needs staged changes; an amend rewrites the
        // tip and is allowed without them.
        if guard.diff.is_none() && !amend {
            bail!("no staged changes found.\nrun `git add <file>` or `git add .` to stage changes.");
        }
        let git = Git::open(&ctx.cwd())?;
        if git.commit(&message, amend)? {
            output::step("staged changes committed", ctx.quiet);
        } else {
            bail!("failed to commit the staged changes.");
        }
    }

    Ok(())
}
