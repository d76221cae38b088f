//! core::storage::schema
//!
//! Schema for the persisted configuration document.
//!
//! # Format
//!
//! A single JSON document, serialized camelCase to stay compatible with
//! the historical on-disk format:
//!
//! ```json
//! {
//!   "apiKey": "...",
//!   "model": "gemini-2.0-flash-exp",
//!   "lastGeneratedMessage": "feat: add thing",
//!   "cache": { "<fingerprint>": "<serialized response>" }
//! }
//! ```
//!
//! # Validation
//!
//! A document is valid iff `model`, when present, belongs to the fixed
//! model catalog. Validation runs after every `update`; an update that
//! produces an invalid document is discarded and the previous state wins.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from document validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Model identifier is not in the catalog.
    #[error("unknown model: {0}")]
    UnknownModel(String),
}

/// The persisted configuration document.
///
/// Whole-document read/write; there is no partial persistence. Unknown
/// fields are rejected so a corrupted or foreign file degrades to the
/// empty document at load time rather than carrying junk forward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Document {
    /// Credential for the model provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Selected model identifier. Must belong to the model catalog;
    /// invalid or missing values resolve to the default at read time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Most recent commit message produced. Overwritten on every
    /// successful generation or manual entry, never auto-deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_generated_message: Option<String>,

    /// Response cache: fingerprint -> serialized provider response.
    ///
    /// Unbounded and append-only by current behavior; a BTreeMap keeps
    /// the serialized form stable across writes.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub cache: BTreeMap<String, String>,
}

impl Document {
    /// Validate the document against the schema.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if let Some(model) = &self.model {
            if !crate::model::catalog::is_known_model(model) {
                return Err(SchemaError::UnknownModel(model.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::DEFAULT_MODEL;

    #[test]
    fn empty_document_is_valid() {
        assert!(Document::default().validate().is_ok());
    }

    #[test]
    fn known_model_is_valid() {
        let doc = Document {
            model: Some(DEFAULT_MODEL.to_string()),
            ..Default::default()
        };
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn unknown_model_is_invalid() {
        let doc = Document {
            model: Some("gpt-unknown".to_string()),
            ..Default::default()
        };
        assert!(matches!(doc.validate(), Err(SchemaError::UnknownModel(_))));
    }

    #[test]
    fn serializes_camel_case() {
        let doc = Document {
            api_key: Some("k".to_string()),
            last_generated_message: Some("feat: x".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"apiKey\""));
        assert!(json.contains("\"lastGeneratedMessage\""));
        assert!(!json.contains("\"cache\""));
    }

    #[test]
    fn round_trips_through_json() {
        let mut doc = Document {
            api_key: Some("k".to_string()),
            model: Some(DEFAULT_MODEL.to_string()),
            last_generated_message: Some("fix: y".to_string()),
            ..Default::default()
        };
        doc.cache.insert("fp".to_string(), "resp".to_string());

        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
