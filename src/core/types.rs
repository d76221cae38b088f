//! core::types
//!
//! Domain types shared across the crate.
//!
//! # Design
//!
//! Commit types are a closed set taken from the commit-message persona:
//! the generator only ever produces messages in the form
//! `<type>: <description>` where `<type>` is one of these variants.
//! Parsing is strict; anything outside the set is a `TypeError` and the
//! caller decides whether to fall back to an interactive selection.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Commit message used for the very first commit in a repository.
///
/// When the repository has zero commits there is no history worth
/// summarizing, so the generator short-circuits to this fixed message
/// without calling the model provider.
pub const INIT_COMMIT_MESSAGE: &str = "chore: init repo";

/// Errors from type construction.
#[derive(Debug, Error)]
pub enum TypeError {
    /// Not a recognized conventional-commit type.
    #[error("invalid commit type: {0}")]
    InvalidCommitType(String),
}

/// Conventional-commit type prefix.
///
/// The set is fixed; it mirrors the standardized types the generation
/// persona is instructed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Refactor,
    Docs,
    Test,
    Chore,
}

impl CommitType {
    /// All commit types, in the order they are presented for selection.
    pub const ALL: [CommitType; 6] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Refactor,
        CommitType::Docs,
        CommitType::Test,
        CommitType::Chore,
    ];

    /// The string form used in commit messages (`feat`, `fix`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Refactor => "refactor",
            CommitType::Docs => "docs",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feat" => Ok(CommitType::Feat),
            "fix" => Ok(CommitType::Fix),
            "refactor" => Ok(CommitType::Refactor),
            "docs" => Ok(CommitType::Docs),
            "test" => Ok(CommitType::Test),
            "chore" => Ok(CommitType::Chore),
            other => Err(TypeError::InvalidCommitType(other.to_string())),
        }
    }
}
