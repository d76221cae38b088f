//! git::interface
//!
//! Git gateway implementation.
//!
//! This module is the **single doorway** to all Git operations in noto.
//! No other module imports `git2` or spawns `git` directly, which keeps
//! error handling consistent and makes the boundary mockable in tests.
//!
//! # Design
//!
//! Repository discovery, history walking, and branch listing go through
//! `git2`. Porcelain operations where behavior should match the user's
//! own `git` exactly - staged diff with pathspec exclusion, commit,
//! push, checkout - shell out to the `git` binary instead, so hooks,
//! configuration, and credential helpers all behave as they would on
//! the command line.
//!
//! # Contract notes
//!
//! - `staged_diff` reads cached changes only and excludes `*.lock`
//!   files; an empty diff is `None`, not an empty string.
//! - `commit` and `push` return booleans: `commit` is true iff a commit
//!   was recorded, `push` is true iff something was actually pushed
//!   ("already up to date" is false). A failing subprocess maps to
//!   `false`, mirroring how the tool treats these as soft outcomes.
//! - `commit_count` counts all reachable commits and reports 0 for a
//!   repository with an unborn HEAD.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// Spawning the `git` binary failed.
    #[error("failed to run git: {0}")]
    Spawn(std::io::Error),

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// Git gateway.
///
/// Holds an open repository handle and its working directory.
pub struct Git {
    repo: git2::Repository,
    workdir: PathBuf,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git").field("workdir", &self.workdir).finish()
    }
}

impl Git {
    /// Open the repository containing `path`, searching upward.
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;
        let workdir = repo.workdir().ok_or(GitError::BareRepo)?.to_path_buf();
        Ok(Git { repo, workdir })
    }

    /// Whether `path` is inside a Git repository.
    pub fn is_repository(path: &Path) -> bool {
        git2::Repository::discover(path).is_ok()
    }

    /// Root of the working tree.
    pub fn root(&self) -> &Path {
        &self.workdir
    }

    /// Staged diff, excluding lock files.
    ///
    /// Returns `None` when nothing is staged.
    pub fn staged_diff(&self) -> Result<Option<String>, GitError> {
        let output = self
            .git(&["diff", "--cached", "--", ".", ":(exclude)*.lock"])
            .output()
            .map_err(GitError::Spawn)?;
        if !output.status.success() {
            return Ok(None);
        }
        let diff = String::from_utf8_lossy(&output.stdout).to_string();
        if diff.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(diff))
        }
    }

    /// Commit staged changes with `message`.
    ///
    /// Returns true iff a commit was recorded. With `amend`, replaces
    /// the tip commit instead of adding a new one.
    pub fn commit(&self, message: &str, amend: bool) -> Result<bool, GitError> {
        let mut args = vec!["commit", "-m", message];
        if amend {
            args.push("--amend");
        }
        let output = self.git(&args).output().map_err(GitError::Spawn)?;
        Ok(output.status.success())
    }

    /// Push the current branch to its upstream.
    ///
    /// Returns true iff something was actually pushed; "already up to
    /// date" and push failures are both false.
    pub fn push(&self) -> Result<bool, GitError> {
        let output = self.git(&["push"]).output().map_err(GitError::Spawn)?;
        if !output.status.success() {
            return Ok(false);
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        Ok(!stderr.contains("Everything up-to-date"))
    }

    /// Number of commits reachable from any ref.
    ///
    /// Returns `Some(0)` for a repository with an unborn HEAD and
    /// `None` when the walk fails.
    pub fn commit_count(&self) -> Option<u64> {
        let mut walk = self.repo.revwalk().ok()?;
        if walk.push_glob("refs/*").is_err() {
            return None;
        }
        Some(walk.filter(|oid| oid.is_ok()).count() as u64)
    }

    /// Subject lines of up to `limit` commits reachable from HEAD,
    /// newest first.
    ///
    /// Merge commits are filtered out locally so guideline generation
    /// does not depend on the model honoring an "ignore merges"
    /// instruction.
    pub fn commit_subjects(&self, limit: usize) -> Result<Vec<String>, GitError> {
        let mut walk = self.repo.revwalk()?;
        if walk.push_head().is_err() {
            // Unborn HEAD: no history.
            return Ok(Vec::new());
        }
        let mut subjects = Vec::new();
        for oid in walk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            if commit.parent_count() > 1 {
                continue;
            }
            if let Some(summary) = commit.summary() {
                subjects.push(summary.to_string());
            }
            if subjects.len() >= limit {
                break;
            }
        }
        Ok(subjects)
    }

    /// Short name of the current branch, if HEAD points at one.
    pub fn current_branch(&self) -> Option<String> {
        let head = self.repo.head().ok()?;
        head.shorthand().map(str::to_string)
    }

    /// Local branch names, optionally including remote-tracking ones.
    pub fn branches(&self, include_remote: bool) -> Result<Vec<String>, GitError> {
        let filter = if include_remote {
            None
        } else {
            Some(git2::BranchType::Local)
        };
        let mut names = Vec::new();
        for branch in self.repo.branches(filter)? {
            let (branch, _) = branch?;
            if let Some(name) = branch.name()? {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Check out an existing branch. Returns true on success.
    pub fn checkout(&self, branch: &str) -> Result<bool, GitError> {
        let output = self
            .git(&["checkout", branch])
            .output()
            .map_err(GitError::Spawn)?;
        Ok(output.status.success())
    }

    /// Create and check out a new branch. Returns true on success.
    pub fn checkout_new(&self, branch: &str) -> Result<bool, GitError> {
        let output = self
            .git(&["checkout", "-b", branch])
            .output()
            .map_err(GitError::Spawn)?;
        Ok(output.status.success())
    }

    fn git(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.workdir).args(args);
        cmd
    }
}
