//! Gemini generateContent against a local wiremock server.

use ai_client::{AiError, Gemini, TextGenerator};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-2.0-flash-exp";

fn gemini(server: &MockServer) -> Gemini {
    Gemini::new("gm-key", MODEL).with_base_url(server.uri())
}

#[tokio::test]
async fn generate_returns_first_candidate_text_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}:generateContent")))
        .and(header("x-goog-api-key", "gm-key"))
        .and(body_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Write the blog post now:"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "<p>Privacy matters.</p>\n"}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = gemini(&server)
        .generate("Write the blog post now:")
        .await
        .unwrap();

    assert_eq!(text, "<p>Privacy matters.</p>\n");
}

#[tokio::test]
async fn api_error_carries_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}:generateContent")))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let err = gemini(&server).generate("prompt").await.unwrap_err();

    match err {
        AiError::Api { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "quota exceeded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn response_without_candidates_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}:generateContent")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let err = gemini(&server).generate("prompt").await.unwrap_err();

    match err {
        AiError::EmptyResponse(msg) => assert!(msg.contains("SAFETY"), "got {msg}"),
        other => panic!("expected EmptyResponse, got {other:?}"),
    }
}
