//! cli::commands::init
//!
//! Create the guideline file for a repository.
//!
//! # Flow
//!
//! 1. Guards: intro, repository.
//! 2. Refuse if a guideline file already governs the current directory;
//!    offer to shadow one found further up the tree.
//! 3. Pick the target directory (git root by default, confirmed
//!    interactively unless `--root`).
//! 4. Write either a generated document (distilled from recent commit
//!    history, at least five non-merge commits required) or the starter
//!    template.

use std::fs;

use anyhow::{bail, Context as _, Result};

use crate::core::paths;
use crate::engine::{run_guards, Context, GuardError, LocalWorkspace, Requirements};
use crate::generate::{self, HISTORY_LIMIT, MIN_COMMITS_FOR_GUIDELINES};
use crate::git::Git;
use crate::model::GeminiProvider;
use crate::ui::{output, prompts};

use super::prompt_failure;

/// Starter guideline file content.
const GUIDELINE_TEMPLATE: &str = "\
# Commit Message Guidelines

<!-- Add your project's commit message guidelines here. -->
<!-- When this file is empty, noto falls back to the conventional commits format. -->
";

pub fn run(ctx: &Context, root: bool, generate_flag: bool) -> Result<()> {
    let workspace = LocalWorkspace::new(ctx.cwd());
    run_guards(&Requirements::REPOSITORY, ctx, &workspace)?;

    let cwd = ctx.cwd();
    let git = Git::open(&cwd)?;
    let repo_root = git.root().to_path_buf();

    let mut target_dir = repo_root.clone();

    if let Some(existing) = paths::find_prompt_file(&cwd, Some(&repo_root)) {
        if existing.starts_with(&cwd) {
            bail!(
                "a guideline file already exists.\n{}",
                existing.display()
            );
        }
        // Found above cwd: offer a nested file that shadows it.
        output::warn(
            format!("a guideline file already exists at {}", existing.display()),
            ctx.quiet,
        );
        let shadow = prompts::confirm(
            "create another one in the current directory?",
            false,
            ctx.interactive,
        )
        .map_err(|e| prompt_failure(e, "nothing created!"))?;
        if !shadow {
            bail!("nothing created!");
        }
        target_dir = cwd.clone();
    } else if !root && cwd != repo_root && ctx.interactive {
        let at_root = prompts::confirm(
            "create the guideline file at the git root?",
            true,
            ctx.interactive,
        )
        .map_err(|e| prompt_failure(e, "nothing created!"))?;
        if !at_root {
            target_dir = cwd.clone();
        }
    }

    let subjects = git.commit_subjects(HISTORY_LIMIT)?;
    let mut generate_doc = generate_flag;
    if generate_doc && subjects.len() < MIN_COMMITS_FOR_GUIDELINES {
        bail!(
            "not enough commit history to generate guidelines.\nat least {} non-merge commits are required.",
            MIN_COMMITS_FOR_GUIDELINES
        );
    }
    if !generate_doc && subjects.len() >= MIN_COMMITS_FOR_GUIDELINES && ctx.interactive {
        generate_doc = prompts::confirm(
            "generate guidelines from the existing commit history?",
            true,
            ctx.interactive,
        )
        .map_err(|e| prompt_failure(e, "nothing created!"))?;
    }

    let content = if generate_doc {
        let api_key = ctx
            .api_key_override
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| ctx.store.get().api_key)
            .ok_or(GuardError::MissingApiKey)?;
        let provider = GeminiProvider::new(api_key);

        output::step("analyzing commit history...", ctx.quiet);
        let runtime = tokio::runtime::Runtime::new()?;
        let mut text = runtime
            .block_on(generate::guidelines(&subjects, &ctx.store, &provider))
            .map_err(|err| {
                let mut text = String::from("failed to generate guidelines.");
                if let Some(detail) = err.api_detail() {
                    text.push('\n');
                    text.push_str(&detail);
                }
                anyhow::anyhow!(text)
            })?;
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text
    } else {
        GUIDELINE_TEMPLATE.to_string()
    };

    let dir = target_dir.join(paths::NOTO_DIR);
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let path = paths::prompt_file_in(&target_dir);
    fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;

    output::success(format!("guideline file created at {}", path.display()), ctx.quiet);
    Ok(())
}
