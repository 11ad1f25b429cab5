// ABOUTME: Tests for PerplexityClient against a mocked upstream server.
// ABOUTME: Covers headers, error statuses, decode failures, and extraction.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::error::SearchError;

fn request() -> ChatRequest {
    ChatRequest::new(MODEL_SONAR_PRO, "what is rust?")
}

fn response_body(contents: &[&str]) -> serde_json::Value {
    json!({
        "id": "resp-1",
        "model": "sonar-pro",
        "choices": contents.iter().map(|c| json!({
            "message": {"role": "assistant", "content": c},
            "finish_reason": "stop"
        })).collect::<Vec<_>>(),
        "usage": {"prompt_tokens": 5, "completion_tokens": 7, "total_tokens": 12}
    })
}

#[tokio::test]
async fn test_chat_sends_bearer_auth_and_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "model": "sonar-pro",
            "messages": [{"role": "user", "content": "what is rust?"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body(&["An answer."])))
        .expect(1)
        .mount(&server)
        .await;

    let client = PerplexityClient::new("test-key").with_base_url(server.uri());
    let outcome = client.chat(&request()).await.unwrap();

    assert_eq!(outcome.content, "An answer.");
    assert_eq!(outcome.usage.unwrap().total_tokens, 12);
}

#[tokio::test]
async fn test_non_200_status_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let client = PerplexityClient::new("test-key").with_base_url(server.uri());
    let err = client.chat(&request()).await.unwrap_err();

    match err {
        SearchError::Api { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limited");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_choices_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body(&[])))
        .mount(&server)
        .await;

    let client = PerplexityClient::new("test-key").with_base_url(server.uri());
    let err = client.chat(&request()).await.unwrap_err();

    assert!(matches!(err, SearchError::EmptyResponse));
}

#[tokio::test]
async fn test_only_first_choice_is_returned() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(response_body(&["first", "second"])),
        )
        .mount(&server)
        .await;

    let client = PerplexityClient::new("test-key").with_base_url(server.uri());
    let outcome = client.chat(&request()).await.unwrap();

    assert_eq!(outcome.content, "first");
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = PerplexityClient::new("test-key").with_base_url(server.uri());
    let err = client.chat(&request()).await.unwrap_err();

    assert!(matches!(err, SearchError::Deserialize(_)));
}

#[tokio::test]
async fn test_transport_failure_is_an_http_error() {
    // Nothing listens on this port.
    let client = PerplexityClient::new("test-key").with_base_url("http://127.0.0.1:1");
    let err = client.chat(&request()).await.unwrap_err();

    assert!(matches!(err, SearchError::Http(_)));
}
