//! model::cache
//!
//! Content-addressed response cache decorating the model call.
//!
//! # Design
//!
//! Generation is the most expensive and highest-latency operation in
//! the tool, and the tool is routinely re-invoked in edit/retry loops
//! over the same diff. The cache turns "regenerate with identical
//! inputs" into a lookup: each request is fingerprinted over its fully
//! resolved parameters and distinct fingerprints invoke the provider at
//! most once, across process runs (entries live in the persisted
//! configuration document).
//!
//! Cache writes go through `Store::update`, so a write rejected by
//! schema validation is silently dropped while the in-flight response
//! is still returned: the cache is best-effort and never fatal.
//!
//! The `use_cache = false` escape hatch skips the cache entirely for a
//! single call - no read, no write, always a fresh provider call.

use sha2::{Digest, Sha256};

use super::traits::{GenerateRequest, GenerateResponse, ModelError, ModelProvider};
use crate::core::storage::Store;

/// Deterministic fingerprint of a fully-resolved request.
///
/// The request is serialized to canonical JSON and hashed with SHA-256
/// using git-blob-style framing (`"blob {len}\0"` prepended), then
/// hex-encoded. Byte-identical requests always hash identically; any
/// difference, including whitespace inside the diff, changes the
/// fingerprint.
pub fn fingerprint(request: &GenerateRequest) -> String {
    // Field order in GenerateRequest is fixed, so serde_json output is
    // canonical for our purposes.
    let body = serde_json::to_string(request).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(format!("blob {}\0", body.len()).as_bytes());
    hasher.update(body.as_bytes());
    hex::encode(hasher.finalize())
}

/// Cache decorator over a model provider.
pub struct CachedClient<'a> {
    provider: &'a dyn ModelProvider,
}

impl<'a> CachedClient<'a> {
    /// Wrap a provider.
    pub fn new(provider: &'a dyn ModelProvider) -> Self {
        CachedClient { provider }
    }

    /// Generate a response, consulting the cache unless `use_cache` is
    /// false.
    ///
    /// On a hit the provider is not invoked. On a miss the full
    /// structured response is serialized and stored under the request
    /// fingerprint before being returned.
    pub async fn generate(
        &self,
        store: &Store,
        request: &GenerateRequest,
        use_cache: bool,
    ) -> Result<GenerateResponse, ModelError> {
        if !use_cache {
            return self.provider.generate(request).await;
        }

        let key = fingerprint(request);

        if let Some(stored) = store.get().cache.get(&key) {
            // An undeserializable entry is treated as a miss.
            if let Ok(response) = serde_json::from_str::<GenerateResponse>(stored) {
                return Ok(response);
            }
        }

        let response = self.provider.generate(request).await?;

        if let Ok(serialized) = serde_json::to_string(&response) {
            store.update(|mut doc| {
                doc.cache.insert(key, serialized);
                doc
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mock::MockProvider;
    use tempfile::TempDir;

    fn request(user_content: &str) -> GenerateRequest {
        GenerateRequest {
            model: "gemini-2.0-flash-exp".to_string(),
            system_prompt: "persona".to_string(),
            user_content: user_content.to_string(),
            output_field: "message".to_string(),
        }
    }

    fn temp_store(dir: &TempDir) -> Store {
        Store::at_path(dir.path().join("storage.json"))
    }

    #[test]
    fn identical_requests_share_a_fingerprint() {
        assert_eq!(fingerprint(&request("diff")), fingerprint(&request("diff")));
    }

    #[test]
    fn whitespace_changes_the_fingerprint() {
        assert_ne!(
            fingerprint(&request("diff")),
            fingerprint(&request("diff "))
        );
    }

    #[test]
    fn model_changes_the_fingerprint() {
        let mut other = request("diff");
        other.model = "gemini-1.5-pro".to_string();
        assert_ne!(fingerprint(&request("diff")), fingerprint(&other));
    }

    #[tokio::test]
    async fn second_identical_call_hits_the_cache() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        let provider = MockProvider::replying("message", "feat: add thing");
        let client = CachedClient::new(&provider);

        let first = client.generate(&store, &request("diff"), true).await.unwrap();
        let second = client.generate(&store, &request("diff"), true).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn cache_survives_across_store_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        let provider = MockProvider::replying("message", "feat: add thing");
        let client = CachedClient::new(&provider);

        let store = Store::at_path(path.clone());
        client.generate(&store, &request("diff"), true).await.unwrap();

        // Fresh store, same file: still a hit.
        let store = Store::at_path(path);
        let response = client.generate(&store, &request("diff"), true).await.unwrap();
        assert_eq!(response.field("message"), Some("feat: add thing"));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn bypass_never_reads_or_writes() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        let provider = MockProvider::replying("message", "feat: add thing");
        let client = CachedClient::new(&provider);

        client.generate(&store, &request("diff"), false).await.unwrap();
        client.generate(&store, &request("diff"), false).await.unwrap();

        assert_eq!(provider.calls(), 2);
        assert!(store.get().cache.is_empty());
    }

    #[tokio::test]
    async fn distinct_requests_each_call_the_provider() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        let provider = MockProvider::replying("message", "feat: add thing");
        let client = CachedClient::new(&provider);

        client.generate(&store, &request("diff a"), true).await.unwrap();
        client.generate(&store, &request("diff b"), true).await.unwrap();

        assert_eq!(provider.calls(), 2);
        assert_eq!(store.get().cache.len(), 2);
    }

    #[tokio::test]
    async fn provider_error_is_not_cached() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        let provider = MockProvider::failing(ModelError::Network("boom".to_string()));
        let client = CachedClient::new(&provider);

        let result = client.generate(&store, &request("diff"), true).await;
        assert!(result.is_err());
        assert!(store.get().cache.is_empty());
    }

    #[tokio::test]
    async fn corrupt_cache_entry_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        let req = request("diff");
        store.update(|mut doc| {
            doc.cache.insert(fingerprint(&req), "{not json".to_string());
            doc
        });

        let provider = MockProvider::replying("message", "feat: add thing");
        let client = CachedClient::new(&provider);
        let response = client.generate(&store, &req, true).await.unwrap();

        assert_eq!(response.field("message"), Some("feat: add thing"));
        assert_eq!(provider.calls(), 1);
    }
}
