//! prompt
//!
//! Prompt assembly for commit-message and guideline generation.
//!
//! # Design
//!
//! Assembly is pure string work: each request kind pairs a fixed system
//! persona with a user message built in a fixed order, and names the
//! single structured-output field the model must produce. For commit
//! messages the user message carries, in order: the effective
//! guidelines (the user's guideline file when present, otherwise the
//! built-in conventional-commits document), an optional commit-type
//! instruction, an optional user context block (only when non-empty),
//! and finally the diff.
//!
//! Keeping assembly deterministic matters beyond readability: the
//! response cache fingerprints the assembled request, so byte-identical
//! inputs must produce byte-identical prompts.

use crate::core::types::CommitType;

/// Output field name for commit-message requests.
pub const MESSAGE_FIELD: &str = "message";

/// Output field name for guideline requests.
pub const PROMPT_FIELD: &str = "prompt";

/// System persona for commit-message generation.
pub const COMMIT_SYSTEM_PROMPT: &str = "\
You are a state-of-the-art AI model tasked with generating a precise Git commit message based on staged changes.
Adhere strictly to the following instructions, ranked by priority:

1. Write the commit message in present tense, starting with a present-tense verb such as add, fix, update, remove, improve, or implement. This applies to all repositories, including Java.
2. Summarize the key changes only, crafting a concise and clear commit message in the format \"<type>: <description>\".
3. Use one of the following standardized types: feat, fix, refactor, docs, test, or chore.
4. Ensure the commit message is a single line, fully lowercase, with no scope or body, and omit punctuation such as full stops at the end.
5. Limit the length of the commit message to 72 characters.
6. Avoid mentioning file names unless a file was renamed or is critical for understanding the changes.
7. Prioritize clarity and focus on the most impactful changes for the commit.

You are expected to generate structured outputs that align with the provided guidelines and produce a message optimized for readability and accuracy. Strictly follow all constraints to ensure high-quality results.";

/// System persona for guideline generation.
pub const GUIDELINES_SYSTEM_PROMPT: &str = "\
You are an expert at analyzing Git commit history and distilling a project's commit-message style into clear written guidelines.
You will receive a list of commit subject lines from a single repository.

1. Identify the conventions actually in use: tense, casing, type prefixes, scopes, subject length, and any recurring vocabulary.
2. Ignore merge commits and other automated noise; they do not represent the project's style.
3. Produce a concise Markdown document titled \"# Commit Message Guidelines\" describing the observed conventions with a few representative examples.
4. Describe only what the history supports; do not invent rules the project does not follow.";

/// Built-in guidelines used when no guideline file is present.
pub const DEFAULT_GUIDELINES: &str = "\
# Commit Message Guidelines

- Use the conventional commits format: `<type>: <description>`.
- Allowed types: feat, fix, refactor, docs, test, chore.
- Write in present tense, starting with a verb (add, fix, update, remove).
- Keep the message a single lowercase line of at most 72 characters.
- No scope, no body, no trailing punctuation.";

/// Assembled request content, ready to pair with a model identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptParts {
    /// Fixed system persona.
    pub system: String,
    /// User message content.
    pub user: String,
    /// Name of the structured-output field.
    pub output_field: &'static str,
}

/// Assemble a commit-message request.
///
/// `guidelines` is the resolved guideline file content, if any;
/// `context` is free-form user context, included only when non-empty
/// after trimming.
pub fn commit_request(
    diff: &str,
    guidelines: Option<&str>,
    context: Option<&str>,
    commit_type: Option<CommitType>,
) -> PromptParts {
    let mut user = String::new();

    user.push_str("commit message guidelines:\n");
    user.push_str(guidelines.unwrap_or(DEFAULT_GUIDELINES).trim_end());
    user.push_str("\n\n");

    if let Some(ty) = commit_type {
        user.push_str(&format!("use the commit type \"{ty}\" for this message.\n\n"));
    }

    if let Some(context) = context {
        let context = context.trim();
        if !context.is_empty() {
            user.push_str("additional context from the user:\n");
            user.push_str(context);
            user.push_str("\n\n");
        }
    }

    user.push_str("generate a commit message for the following staged changes:\n");
    user.push_str(diff);

    PromptParts {
        system: COMMIT_SYSTEM_PROMPT.to_string(),
        user,
        output_field: MESSAGE_FIELD,
    }
}

/// Assemble a guideline-generation request from commit subject lines.
pub fn guidelines_request(subjects: &[String]) -> PromptParts {
    let mut user = String::new();
    user.push_str("derive commit message guidelines from the following commit history:\n");
    user.push_str(&subjects.join("\n"));

    PromptParts {
        system: GUIDELINES_SYSTEM_PROMPT.to_string(),
        user,
        output_field: PROMPT_FIELD,
    }
}
