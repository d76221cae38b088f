//! generate
//!
//! Orchestrators for commit-message and guideline generation.
//!
//! # Design
//!
//! These functions tie the prompt assembler, the response cache, and
//! the model provider together. They are non-interactive: commit-type
//! selection and message editing happen in the command layer, so the
//! orchestration here stays deterministic and testable with a mock
//! provider.
//!
//! # Invariants
//!
//! - A repository with zero commits never reaches the provider; the
//!   fixed init message is returned instead.
//! - The final message text (edited or not) is persisted as
//!   `lastGeneratedMessage` via [`finalize`], unconditionally.
//! - No retries: a provider failure surfaces immediately with its
//!   structured detail.

use thiserror::Error;

use crate::core::storage::Store;
use crate::core::types::{CommitType, INIT_COMMIT_MESSAGE};
use crate::git::{Git, GitError};
use crate::model::{catalog, CachedClient, GenerateRequest, ModelError, ModelProvider};
use crate::prompt;

/// How many recent commit subjects feed guideline generation.
pub const HISTORY_LIMIT: usize = 200;

/// Minimum history size for guideline generation.
pub const MIN_COMMITS_FOR_GUIDELINES: usize = 5;

/// Errors from generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The provider call failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The provider replied without the requested field.
    #[error("model response is missing the {0} field")]
    MissingField(&'static str),

    /// Repository access failed.
    #[error(transparent)]
    Git(#[from] GitError),
}

impl GenerateError {
    /// Provider-reported API detail, when the failure carries one.
    ///
    /// Used by commands to surface the upstream message alongside the
    /// generic failure line.
    pub fn api_detail(&self) -> Option<String> {
        match self {
            GenerateError::Model(ModelError::Api { status, message }) => {
                Some(format!("{} (status {})", message, status))
            }
            _ => None,
        }
    }
}

/// Options for commit-message generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitOptions<'a> {
    /// Resolved commit type, when one was chosen.
    pub commit_type: Option<CommitType>,
    /// Free-text user context.
    pub context: Option<&'a str>,
    /// Resolved guideline file content.
    pub guidelines: Option<&'a str>,
    /// Consult the response cache. `false` is the bypass escape hatch.
    pub use_cache: bool,
}

/// Generate a commit message for `diff`.
///
/// A repository with zero commits short-circuits to the fixed init
/// message without calling the provider.
pub async fn commit_message(
    git: &Git,
    store: &Store,
    provider: &dyn ModelProvider,
    diff: &str,
    opts: &CommitOptions<'_>,
) -> Result<String, GenerateError> {
    if git.commit_count() == Some(0) {
        return Ok(INIT_COMMIT_MESSAGE.to_string());
    }

    let parts = prompt::commit_request(diff, opts.guidelines, opts.context, opts.commit_type);
    let request = GenerateRequest {
        model: catalog::resolve_model(store),
        system_prompt: parts.system,
        user_content: parts.user,
        output_field: parts.output_field.to_string(),
    };

    let response = CachedClient::new(provider)
        .generate(store, &request, opts.use_cache)
        .await?;

    let message = response
        .field(prompt::MESSAGE_FIELD)
        .ok_or(GenerateError::MissingField(prompt::MESSAGE_FIELD))?
        .trim()
        .to_string();

    Ok(message)
}

/// Generate a guideline document from commit subject lines.
///
/// The subjects are expected to be merge-filtered already (the git
/// gateway does this when walking history).
pub async fn guidelines(
    subjects: &[String],
    store: &Store,
    provider: &dyn ModelProvider,
) -> Result<String, GenerateError> {
    let parts = prompt::guidelines_request(subjects);
    let request = GenerateRequest {
        model: catalog::resolve_model(store),
        system_prompt: parts.system,
        user_content: parts.user,
        output_field: parts.output_field.to_string(),
    };

    let response = CachedClient::new(provider)
        .generate(store, &request, true)
        .await?;

    let text = response
        .field(prompt::PROMPT_FIELD)
        .ok_or(GenerateError::MissingField(prompt::PROMPT_FIELD))?
        .trim()
        .to_string();

    Ok(text)
}

/// Persist `message` as the last generated message.
///
/// Called for every final message - generated, edited, or entered
/// manually - regardless of what the user does with it afterwards.
pub fn finalize(store: &Store, message: &str) {
    store.update(|mut doc| {
        doc.last_generated_message = Some(message.to_string());
        doc
    });
}
