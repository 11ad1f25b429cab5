// ABOUTME: Wire types for the Perplexity chat completions API - request,
// ABOUTME: response, and the closed set of supported model identifiers.

use serde::{Deserialize, Serialize};

/// Advanced search offering with grounding. The default model.
pub const MODEL_SONAR_PRO: &str = "sonar-pro";

/// Lightweight, cost-effective search model.
pub const MODEL_SONAR: &str = "sonar";

/// Expert-level research model for comprehensive reports.
pub const MODEL_DEEP_RESEARCH: &str = "sonar-deep-research";

/// Premier reasoning model with chain of thought.
pub const MODEL_REASONING_PRO: &str = "sonar-reasoning-pro";

/// Fast, real-time reasoning model.
pub const MODEL_REASONING: &str = "sonar-reasoning";

/// Offline chat model with no search capability.
pub const MODEL_R1: &str = "r1-1776";

/// The closed set of accepted model identifiers. Caller-supplied models
/// must match one of these exactly.
pub const VALID_MODELS: [&str; 6] = [
    MODEL_SONAR_PRO,
    MODEL_SONAR,
    MODEL_DEEP_RESEARCH,
    MODEL_REASONING_PRO,
    MODEL_REASONING,
    MODEL_R1,
];

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a user message carrying the search query.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Web search configuration nested inside a chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_context_size: Option<String>,
}

/// Request body for the chat completions endpoint.
///
/// Optional fields are modeled as `Option` (or an emptiable `Vec`) so that
/// anything the builder leaves unset never appears on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_domain_filter: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_related_questions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_recency_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_search_options: Option<WebSearchOptions>,
}

impl ChatRequest {
    /// Create a bare request for the given model and query, all tuning
    /// fields unset.
    pub fn new(model: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(query)],
            max_tokens: None,
            temperature: None,
            top_p: None,
            search_domain_filter: Vec::new(),
            return_images: None,
            return_related_questions: None,
            search_recency_filter: None,
            top_k: None,
            stream: None,
            presence_penalty: None,
            frequency_penalty: None,
            response_format: None,
            web_search_options: None,
        }
    }
}

/// A candidate completion in a chat response.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    pub finish_reason: Option<String>,
}

/// Message payload of a response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    pub role: String,
    pub content: String,
}

/// Token usage counters reported by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageStats {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Response body from the chat completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Option<UsageStats>,
}
