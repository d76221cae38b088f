//! ui
//!
//! User interaction utilities: output formatting, interactive prompts,
//! and clipboard access.

pub mod clipboard;
pub mod output;
pub mod prompts;

pub use prompts::PromptError;
