//! Gemini provider tests against a local mock HTTP server.

use noto::model::{GeminiProvider, GenerateRequest, ModelError, ModelProvider};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> GenerateRequest {
    GenerateRequest {
        model: "gemini-2.0-flash-exp".to_string(),
        system_prompt: "persona".to_string(),
        user_content: "diff".to_string(),
        output_field: "message".to_string(),
    }
}

fn reply_with(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "role": "model", "parts": [{ "text": text }] } }
        ]
    })
}

#[tokio::test]
async fn successful_generation_extracts_the_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash-exp:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(reply_with(r#"{"message":"feat: add parser"}"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::with_api_base("test-key", server.uri());
    let response = provider.generate(&request()).await.unwrap();
    assert_eq!(response.field("message"), Some("feat: add parser"));
}

#[tokio::test]
async fn request_asks_for_structured_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": { "required": ["message"] },
            }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(reply_with(r#"{"message":"feat: x"}"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::with_api_base("test-key", server.uri());
    provider.generate(&request()).await.unwrap();
}

#[tokio::test]
async fn fenced_json_replies_are_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_with(
            "```json\n{\"message\":\"fix: strip fences\"}\n```",
        )))
        .mount(&server)
        .await;

    let provider = GeminiProvider::with_api_base("test-key", server.uri());
    let response = provider.generate(&request()).await.unwrap();
    assert_eq!(response.field("message"), Some("fix: strip fences"));
}

#[tokio::test]
async fn api_errors_carry_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "quota exceeded" }
        })))
        .mount(&server)
        .await;

    let provider = GeminiProvider::with_api_base("test-key", server.uri());
    let err = provider.generate(&request()).await.unwrap_err();
    match err {
        ModelError::Api { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "quota exceeded");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn replies_without_the_field_are_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(reply_with(r#"{"other":"value"}"#)),
        )
        .mount(&server)
        .await;

    let provider = GeminiProvider::with_api_base("test-key", server.uri());
    let err = provider.generate(&request()).await.unwrap_err();
    assert!(matches!(err, ModelError::InvalidResponse(_)));
}
