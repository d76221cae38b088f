//! engine::guard
//!
//! Ordered guard stages gating command execution.
//!
//! # Architecture
//!
//! Each command declares a [`Requirements`] record; [`run_guards`] folds
//! the fixed stage list ([`STAGES`]) over it, accumulating a
//! [`CommandContext`] and short-circuiting with a [`GuardError`] on the
//! first failed required stage. Guard order is a visible data
//! structure, not a chain of nested closures, so it can be asserted in
//! tests.
//!
//! # Invariants
//!
//! - Stages run strictly in order: Intro, Auth, Repository, Guidelines
//! - A failed required stage prevents the command body from running
//! - The auth stage resolves the environment override before the store
//! - Guideline absence is never an error; the built-in default applies
//!
//! Repository access goes through the narrow [`Workspace`] trait so the
//! runner can be exercised without a real repository (and so ordering
//! claims like "auth fails before the repository is ever queried" are
//! testable).

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Context;
use crate::core::paths;
use crate::git::Git;
use crate::ui::output;

/// Guard failures, each rendered with a remedy hint.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuardError {
    #[error("noto api key is missing.\nrun `noto config key` to set it up.")]
    MissingApiKey,

    #[error("no git repository found in cwd.\nrun `git init` to initialize a new repository.")]
    NoRepository,

    #[error("no staged changes found.\nrun `git add <file>` or `git add .` to stage changes.")]
    NoStagedChanges,
}

/// Guard stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Presentational banner; never gates.
    Intro,
    /// Credential resolution (environment first, then store).
    Auth,
    /// Repository presence and staged diff.
    Repository,
    /// Guideline file discovery.
    Guidelines,
}

/// The fixed stage order.
pub const STAGES: [Stage; 4] = [Stage::Intro, Stage::Auth, Stage::Repository, Stage::Guidelines];

/// Per-command guard requirements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requirements {
    /// Print the intro banner.
    pub intro: bool,
    /// A credential must resolve.
    pub auth: bool,
    /// A repository must be present.
    pub repository: bool,
    /// A non-empty staged diff must be present (implies repository).
    pub diff: bool,
    /// Resolve the guideline file (absence is not an error).
    pub guidelines: bool,
}

impl Requirements {
    /// Message generation: everything.
    pub const GENERATE: Requirements = Requirements {
        intro: true,
        auth: true,
        repository: true,
        diff: true,
        guidelines: true,
    };

    /// Previous-message access: credential and repository, diff checked
    /// only when applying.
    pub const PREV: Requirements = Requirements {
        intro: true,
        auth: true,
        repository: true,
        diff: false,
        guidelines: false,
    };

    /// Repository-only commands (init, branch, checkout).
    pub const REPOSITORY: Requirements = Requirements {
        intro: true,
        auth: false,
        repository: true,
        diff: false,
        guidelines: false,
    };

    /// Configuration commands: banner only.
    pub const CONFIG: Requirements = Requirements {
        intro: true,
        auth: false,
        repository: false,
        diff: false,
        guidelines: false,
    };
}

/// Workspace queries needed by the guard stages.
///
/// Implemented by [`LocalWorkspace`] for real invocations and by stubs
/// in tests.
pub trait Workspace {
    /// Whether a repository is present.
    fn is_repository(&self) -> bool;
    /// The staged diff, or `None` when nothing is staged.
    fn staged_diff(&self) -> Option<String>;
    /// The repository root, when one resolves.
    fn root(&self) -> Option<PathBuf>;
}

/// Workspace backed by the real git gateway at a directory.
#[derive(Debug)]
pub struct LocalWorkspace {
    cwd: PathBuf,
}

impl LocalWorkspace {
    pub fn new(cwd: PathBuf) -> Self {
        LocalWorkspace { cwd }
    }
}

impl Workspace for LocalWorkspace {
    fn is_repository(&self) -> bool {
        Git::is_repository(&self.cwd)
    }

    fn staged_diff(&self) -> Option<String> {
        let git = Git::open(&self.cwd).ok()?;
        git.staged_diff().ok().flatten()
    }

    fn root(&self) -> Option<PathBuf> {
        let git = Git::open(&self.cwd).ok()?;
        Some(git.root().to_path_buf())
    }
}

/// Context accumulated by the guard stages, read-only to command
/// bodies.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Resolved credential, when one exists.
    pub api_key: Option<String>,
    /// Whether a repository was found.
    pub is_repository: bool,
    /// Staged diff text, when present.
    pub diff: Option<String>,
    /// Guideline file content, when a file was found.
    pub guidelines: Option<String>,
}

/// Run the guard stages for `requirements`.
///
/// Stages execute in [`STAGES`] order; the first failed required stage
/// aborts with its error before any later stage runs.
pub fn run_guards(
    requirements: &Requirements,
    ctx: &Context,
    workspace: &dyn Workspace,
) -> Result<CommandContext, GuardError> {
    let mut out = CommandContext::default();

    for stage in STAGES {
        match stage {
            Stage::Intro => {
                if requirements.intro && !ctx.quiet {
                    output::intro();
                }
            }
            Stage::Auth => {
                out.api_key = ctx
                    .api_key_override
                    .clone()
                    .filter(|k| !k.is_empty())
                    .or_else(|| ctx.store.get().api_key);
                if requirements.auth && out.api_key.is_none() {
                    return Err(GuardError::MissingApiKey);
                }
            }
            Stage::Repository => {
                if !requirements.repository && !requirements.diff {
                    continue;
                }
                out.is_repository = workspace.is_repository();
                if !out.is_repository {
                    if requirements.repository {
                        return Err(GuardError::NoRepository);
                    }
                    continue;
                }
                out.diff = workspace.staged_diff();
                if requirements.diff && out.diff.is_none() {
                    return Err(GuardError::NoStagedChanges);
                }
            }
            Stage::Guidelines => {
                if requirements.guidelines {
                    out.guidelines = resolve_guidelines(&ctx.cwd(), workspace.root().as_deref());
                }
            }
        }
    }

    Ok(out)
}

/// Locate and read the nearest guideline file.
///
/// Read errors are swallowed; a guideline file that cannot be read
/// behaves like an absent one.
fn resolve_guidelines(cwd: &Path, root: Option<&Path>) -> Option<String> {
    let stop_at = root.unwrap_or(cwd);
    let path = paths::find_prompt_file(cwd, Some(stop_at))?;
    fs::read_to_string(path).ok()
}
