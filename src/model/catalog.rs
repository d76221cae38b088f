//! model::catalog
//!
//! The fixed set of selectable model identifiers.
//!
//! # Resolution
//!
//! The stored `model` value is resolved through [`resolve_model`]: a
//! valid stored identifier wins; anything invalid or missing falls back
//! to [`DEFAULT_MODEL`], and the fallback is persisted so subsequent
//! runs see a consistent document.

use crate::core::storage::Store;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Selectable model identifiers, in presentation order.
pub const MODELS: &[&str] = &[
    "gemini-1.5-flash",
    "gemini-1.5-flash-latest",
    "gemini-1.5-flash-8b",
    "gemini-1.5-flash-8b-latest",
    "gemini-1.5-pro",
    "gemini-1.5-pro-latest",
    "gemini-2.0-flash-001",
    "gemini-2.0-flash-exp",
    "gemini-2.0-flash-lite-preview-02-05",
    "gemini-2.5-pro-exp-03-25",
    "gemini-2.5-flash-preview-04-17",
    "gemini-2.5-pro-preview-05-06",
];

/// Models with no free quota tier; selecting one prompts for
/// confirmation.
pub const PAID_MODELS: &[&str] = &["gemini-2.5-pro-preview-05-06"];

/// Whether `id` belongs to the catalog.
pub fn is_known_model(id: &str) -> bool {
    MODELS.contains(&id)
}

/// Resolve the effective model from the store.
///
/// Invalid or missing stored values fall back to [`DEFAULT_MODEL`],
/// which is then persisted.
pub fn resolve_model(store: &Store) -> String {
    match store.get().model {
        Some(model) if is_known_model(&model) => model,
        _ => {
            store.update(|mut doc| {
                doc.model = Some(DEFAULT_MODEL.to_string());
                doc
            });
            DEFAULT_MODEL.to_string()
        }
    }
}
