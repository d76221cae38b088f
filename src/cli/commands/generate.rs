//! cli::commands::generate
//!
//! The default command: generate a commit message for the staged
//! changes, then run the requested follow-ups (copy, commit, push).
//!
//! # Flow
//!
//! 1. Guards: intro, credential, repository + staged diff, guidelines.
//! 2. Resolve the commit type (flag, or interactive selection).
//! 3. Generate (or take `--message` verbatim), optionally edit.
//! 4. Persist as the last generated message, then copy/commit/push.
//!
//! The message is persisted before any follow-up runs, so `noto prev`
//! can recover it even when the commit or push step fails.

use anyhow::{bail, Result};

use crate::cli::args::GenerateArgs;
use crate::core::types::CommitType;
use crate::engine::{run_guards, Context, LocalWorkspace, Requirements};
use crate::generate::{self, CommitOptions};
use crate::git::Git;
use crate::model::GeminiProvider;
use crate::ui::{clipboard, output, prompts, PromptError};

use super::prompt_failure;

pub fn run(ctx: &Context, args: &GenerateArgs) -> Result<()> {
    let workspace = LocalWorkspace::new(ctx.cwd());
    let guard = run_guards(&Requirements::GENERATE, ctx, &workspace)?;
    let git = Git::open(&ctx.cwd())?;

    let mut message = match &args.message {
        Some(manual) => {
            let manual = manual.trim();
            if manual.is_empty() {
                bail!("the provided commit message is empty.");
            }
            manual.to_string()
        }
        None => {
            let commit_type = resolve_commit_type(ctx, args.commit_type.as_deref())?;
            let diff = guard.diff.as_deref().unwrap_or_default();
            let opts = CommitOptions {
                commit_type,
                context: args.context.as_deref(),
                guidelines: guard.guidelines.as_deref(),
                use_cache: !args.no_cache,
            };
            // Guards guarantee a key when we get here.
            let provider = GeminiProvider::new(guard.api_key.clone().unwrap_or_default());

            output::step("generating commit message...", ctx.quiet);
            let runtime = tokio::runtime::Runtime::new()?;
            match runtime.block_on(generate::commit_message(&git, &ctx.store, &provider, diff, &opts)) {
                Ok(message) => message,
                Err(err) => {
                    let mut text = String::from("failed to generate commit message.");
                    if let Some(detail) = err.api_detail() {
                        text.push('\n');
                        text.push_str(&detail);
                    }
                    bail!(text);
                }
            }
        }
    };

    if args.edit {
        message = prompts::input("edit the commit message", Some(&message), ctx.interactive)
            .map_err(|e| prompt_failure(e, "nothing changed!"))?;
        if message.trim().is_empty() {
            bail!("the edited commit message is empty.");
        }
        message = message.trim().to_string();
    }

    generate::finalize(&ctx.store, &message);
    output::success(&message, ctx.quiet);
    if ctx.quiet {
        // Quiet mode still emits the message itself for scripting.
        println!("{}", message);
    }

    if args.copy {
        match clipboard::copy(&message) {
            Ok(()) => output::step("copied to clipboard", ctx.quiet),
            Err(err) => output::warn(format!("clipboard copy failed: {}", err), ctx.quiet),
        }
    }

    if args.apply || args.amend {
        if git.commit(&message, args.amend)? {
            output::step("staged changes committed", ctx.quiet);
        } else {
            bail!("failed to commit the staged changes.");
        }
    }

    if args.push {
        if !args.apply && !args.amend {
            bail!("--push requires --apply or --amend.");
        }
        if git.push()? {
            output::step("pushed to remote", ctx.quiet);
        } else {
            output::warn("nothing was pushed", ctx.quiet);
        }
    }

    Ok(())
}

/// Resolve the commit type from the flag, falling back to interactive
/// selection.
///
/// An unset flag in non-interactive mode means "no constraint"; an
/// explicitly invalid flag value is always an error there.
fn resolve_commit_type(ctx: &Context, flag: Option<&str>) -> Result<Option<CommitType>> {
    if let Some(raw) = flag {
        if let Ok(ty) = raw.parse::<CommitType>() {
            return Ok(Some(ty));
        }
        if !ctx.interactive {
            bail!(
                "unknown commit type \"{}\".\nvalid types: {}.",
                raw,
                CommitType::ALL.map(|t| t.as_str()).join(", ")
            );
        }
        output::warn(format!("unknown commit type \"{}\"", raw), ctx.quiet);
    } else if !ctx.interactive {
        return Ok(None);
    }

    let labels: Vec<&str> = CommitType::ALL.iter().map(|t| t.as_str()).collect();
    match prompts::select("select a commit type", &labels, Some(0), ctx.interactive) {
        Ok(index) => Ok(Some(CommitType::ALL[index])),
        Err(PromptError::NotInteractive) => Ok(None),
        Err(err) => Err(prompt_failure(err, "nothing selected!")),
    }
}
