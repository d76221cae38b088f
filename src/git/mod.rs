//! git
//!
//! Single interface for all Git operations.
//!
//! All repository access flows through [`Git`]; no other module touches
//! `git2` or spawns the `git` binary.

mod interface;

pub use interface::{Git, GitError};
