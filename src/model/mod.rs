//! model
//!
//! Language-model provider abstraction.
//!
//! # Design
//!
//! The rest of the crate talks to providers only through the narrow
//! [`ModelProvider`] trait, keeping provider-specific wire formats out
//! of the core. [`cache::CachedClient`] decorates any provider with the
//! content-addressed response cache; [`catalog`] owns the fixed set of
//! selectable model identifiers.

pub mod cache;
pub mod catalog;
pub mod gemini;
pub mod mock;
pub mod traits;

pub use cache::{fingerprint, CachedClient};
pub use gemini::GeminiProvider;
pub use traits::{GenerateRequest, GenerateResponse, ModelError, ModelProvider};
