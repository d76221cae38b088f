//! model::gemini
//!
//! Gemini provider implementation over the Generative Language REST API.
//!
//! # Design
//!
//! Requests go to `models/{model}:generateContent` with the system
//! persona as a `systemInstruction` and the user content as a single
//! user turn. The generation config asks for `application/json` output
//! constrained to one string property (the request's `output_field`),
//! so the caller never parses free-form prose.
//!
//! The reply is parsed leniently: some models wrap the JSON in a
//! Markdown code fence even when asked for raw JSON, so fences are
//! stripped before parsing.
//!
//! # Errors
//!
//! API-level failures surface as [`ModelError::Api`] with the status
//! code and the message reported by the service; transport failures map
//! to [`ModelError::Network`]. No retries happen here.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::traits::{GenerateRequest, GenerateResponse, ModelError, ModelProvider};

/// Default API base URL.
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Gemini model provider.
pub struct GeminiProvider {
    /// HTTP client for making requests
    client: Client,
    /// API key credential
    api_key: String,
    /// API base URL (overridable for tests)
    api_base: String,
}

// Custom Debug to avoid exposing the API key
impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl GeminiProvider {
    /// Create a provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_api_base(api_key, DEFAULT_API_BASE)
    }

    /// Create a provider against a custom API base URL.
    ///
    /// Used by tests to point the client at a local mock server.
    pub fn with_api_base(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        GeminiProvider {
            client: Client::new(),
            api_key: api_key.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_base, model)
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Strip a surrounding Markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[async_trait]
impl ModelProvider for GeminiProvider {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ModelError> {
        let body = ApiRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: request.system_prompt.clone(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: request.user_content.clone(),
                }],
            }],
            generation_config: json!({
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        (request.output_field.as_str()): { "type": "STRING" }
                    },
                    "required": [request.output_field.as_str()],
                },
            }),
        };

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or(text);
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ApiResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| ModelError::InvalidResponse("no candidates in response".to_string()))?;

        let object: serde_json::Value = serde_json::from_str(strip_code_fence(text))
            .map_err(|e| ModelError::InvalidResponse(format!("not valid JSON: {e}")))?;

        let value = object
            .get(&request.output_field)
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ModelError::InvalidResponse(format!("missing field: {}", request.output_field))
            })?;

        Ok(GenerateResponse::with_field(&request.output_field, value))
    }
}
