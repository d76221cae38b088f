//! noto - AI-powered commit messages for staged changes.
//!
//! noto inspects the staged diff of the current repository, sends it to
//! a hosted model together with the project's commit-style guidelines,
//! and returns a single-line conventional commit message. The message
//! can be copied, edited, committed, or pushed in the same invocation,
//! and the last generated message is kept around for `noto prev`.
//!
//! # Architecture
//!
//! ```text
//! cli      argument parsing and command handlers
//! engine   execution context and ordered guard stages
//! generate orchestration of prompt, cache, and provider
//! prompt   deterministic prompt assembly
//! model    provider trait, Gemini client, response cache, catalog
//! git      the single gateway to all repository operations
//! core     commit types, path routing, persisted configuration
//! ui       output, prompts, clipboard
//! ```
//!
//! Layers only point downward: `cli` is the only interactive layer,
//! `generate` and below are deterministic and exercised with a mock
//! provider and temporary stores in tests.

pub mod cli;
pub mod core;
pub mod engine;
pub mod generate;
pub mod git;
pub mod model;
pub mod prompt;
pub mod ui;
