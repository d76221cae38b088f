//! model::traits
//!
//! Provider trait for structured text generation.
//!
//! # Design
//!
//! The trait is deliberately narrow: one `generate` operation taking a
//! fully-resolved request and returning a structured response with named
//! string fields. Nothing above this layer depends on provider-specific
//! types, so any backend can be substituted (the tests use
//! [`MockProvider`]).
//!
//! The trait is async because generation is network I/O.
//!
//! [`MockProvider`]: crate::model::mock::MockProvider

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from model providers.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// The provider API rejected the request. Carries the structured
    /// detail reported by the API so commands can surface it.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),

    /// The provider returned something that could not be interpreted as
    /// the requested structured output.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A fully-resolved generation request.
///
/// Two requests with byte-identical fields are the same request for
/// caching purposes; any difference, including whitespace inside the
/// user content, makes them distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model identifier.
    pub model: String,
    /// System persona and formatting rules.
    pub system_prompt: String,
    /// User content (guidelines, context, diff or commit history).
    pub user_content: String,
    /// Name of the single string field the model must produce.
    pub output_field: String,
}

/// Structured generation result.
///
/// Stored responses must round-trip through serialization, so the full
/// field map is kept rather than just the extracted text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Named string fields produced by the model.
    pub fields: BTreeMap<String, String>,
}

impl GenerateResponse {
    /// Build a response with a single field.
    pub fn with_field(name: &str, value: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(name.to_string(), value.into());
        GenerateResponse { fields }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// A language-model provider.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Generate a structured response for `request`.
    ///
    /// Implementations perform exactly one logical attempt; the core
    /// never retries on top of this call.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ModelError>;
}
