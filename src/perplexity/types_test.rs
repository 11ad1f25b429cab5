// ABOUTME: Tests for wire types - serialization omission of unset fields
// ABOUTME: and deserialization of API responses.

use serde_json::json;

use super::*;
use crate::config::Config;

#[test]
fn test_unset_fields_are_omitted_on_the_wire() {
    let req = ChatRequest::new(MODEL_SONAR, "hello");
    let wire = serde_json::to_value(&req).unwrap();

    let obj = wire.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(wire["model"], "sonar");
    assert_eq!(wire["messages"][0]["role"], "user");
    assert_eq!(wire["messages"][0]["content"], "hello");
}

#[test]
fn test_built_request_wire_format() {
    let args = json!({"query": "rust", "search_domain_filter": ["a.com"]});
    let req = build_chat_request(&args, &Config::new("k")).unwrap();

    let wire = serde_json::to_value(&req).unwrap();

    assert_eq!(wire["model"], "sonar-pro");
    assert_eq!(wire["max_tokens"], 2000);
    assert_eq!(wire["temperature"], 0.2);
    assert_eq!(wire["top_p"], 0.9);
    assert_eq!(wire["frequency_penalty"], 1.0);
    assert_eq!(wire["search_domain_filter"], json!(["a.com"]));
    assert_eq!(wire["web_search_options"]["search_context_size"], "medium");

    // Resolved defaults are serialized even at their zero values; only
    // fields the builder never touches stay off the wire.
    assert_eq!(wire["top_k"], 0);
    assert_eq!(wire["presence_penalty"], 0.0);
    assert_eq!(wire["stream"], false);
    assert_eq!(wire["return_images"], false);
    assert_eq!(wire["return_related_questions"], false);

    // Fields the builder never set stay off the wire entirely.
    let obj = wire.as_object().unwrap();
    assert!(!obj.contains_key("search_recency_filter"));
    assert!(!obj.contains_key("response_format"));
}

#[test]
fn test_empty_domain_filter_is_omitted() {
    let req = build_chat_request(&json!({"query": "q"}), &Config::new("k")).unwrap();
    let wire = serde_json::to_value(&req).unwrap();

    assert!(!wire.as_object().unwrap().contains_key("search_domain_filter"));
}

#[test]
fn test_offline_request_carries_no_search_fields() {
    let args = json!({
        "query": "q",
        "model": MODEL_R1,
        "search_domain_filter": ["a.com"],
        "return_images": true,
        "web_search_options": {"search_context_size": "high"}
    });
    let req = build_chat_request(&args, &Config::new("k")).unwrap();
    let wire = serde_json::to_value(&req).unwrap();

    let obj = wire.as_object().unwrap();
    assert!(!obj.contains_key("search_domain_filter"));
    assert!(!obj.contains_key("search_recency_filter"));
    assert!(!obj.contains_key("web_search_options"));
    assert_eq!(wire["return_images"], false);
    assert_eq!(wire["return_related_questions"], false);
}

#[test]
fn test_response_deserialization() {
    let body = r#"{
        "id": "resp-123",
        "object": "chat.completion",
        "created": 1710000000,
        "model": "sonar-pro",
        "choices": [
            {
                "message": {"role": "assistant", "content": "Answer text"},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
    }"#;

    let resp: ChatResponse = serde_json::from_str(body).unwrap();

    assert_eq!(resp.id, "resp-123");
    assert_eq!(resp.model, "sonar-pro");
    assert_eq!(resp.choices.len(), 1);
    assert_eq!(resp.choices[0].message.content, "Answer text");
    assert_eq!(resp.choices[0].finish_reason.as_deref(), Some("stop"));
    assert_eq!(resp.usage.unwrap().total_tokens, 30);
}

#[test]
fn test_response_tolerates_missing_metadata() {
    let body = r#"{"choices": [{"message": {"role": "assistant", "content": "hi"}, "finish_reason": null}]}"#;

    let resp: ChatResponse = serde_json::from_str(body).unwrap();

    assert_eq!(resp.choices[0].message.content, "hi");
    assert!(resp.usage.is_none());
}
