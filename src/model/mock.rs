//! model::mock
//!
//! Mock provider for deterministic testing.
//!
//! # Design
//!
//! The mock stores a canned reply per output field, records every
//! request it receives, and can be configured to fail. Call counting is
//! what the cache tests rely on: the at-most-one-call guarantee is
//! asserted by inspecting [`MockProvider::calls`].
//!
//! # Example
//!
//! ```
//! use noto::model::mock::MockProvider;
//! use noto::model::{GenerateRequest, ModelProvider};
//!
//! # tokio_test::block_on(async {
//! let provider = MockProvider::replying("message", "feat: add thing");
//! let request = GenerateRequest {
//!     model: "gemini-2.0-flash-exp".to_string(),
//!     system_prompt: "persona".to_string(),
//!     user_content: "diff".to_string(),
//!     output_field: "message".to_string(),
//! };
//!
//! let response = provider.generate(&request).await.unwrap();
//! assert_eq!(response.field("message"), Some("feat: add thing"));
//! assert_eq!(provider.calls(), 1);
//! # });
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{GenerateRequest, GenerateResponse, ModelError, ModelProvider};

/// Mock provider for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share
/// state.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    inner: Arc<Mutex<MockInner>>,
}

#[derive(Debug, Default)]
struct MockInner {
    /// Canned reply text, returned under the request's output field.
    reply: Option<String>,
    /// Error to return instead of a reply.
    fail_with: Option<ModelError>,
    /// Every request received, in order.
    requests: Vec<GenerateRequest>,
    /// When true, any call panics. Used to assert a path never reaches
    /// the provider at all.
    panic_on_call: bool,
}

impl MockProvider {
    /// A mock that replies with `text` for any request.
    ///
    /// `field` is only documentation at the call site; the reply is
    /// returned under whatever output field the request names.
    pub fn replying(_field: &str, text: impl Into<String>) -> Self {
        let mock = MockProvider::default();
        mock.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .reply = Some(text.into());
        mock
    }

    /// A mock that fails every call with `error`.
    pub fn failing(error: ModelError) -> Self {
        let mock = MockProvider::default();
        mock.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .fail_with = Some(error);
        mock
    }

    /// A mock that panics if called. For asserting short-circuits.
    pub fn unreachable() -> Self {
        let mock = MockProvider::default();
        mock.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .panic_on_call = true;
        mock
    }

    /// Number of calls received.
    pub fn calls(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .requests
            .len()
    }

    /// Copy of the recorded requests.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .requests
            .clone()
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ModelError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if inner.panic_on_call {
            panic!("provider was called but must not be reached");
        }
        inner.requests.push(request.clone());
        if let Some(err) = &inner.fail_with {
            return Err(err.clone());
        }
        let reply = inner.reply.clone().unwrap_or_default();
        Ok(GenerateResponse::with_field(&request.output_field, reply))
    }
}
