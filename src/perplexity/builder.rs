// ABOUTME: Request builder - turns a loosely-typed JSON argument bag plus
// ABOUTME: process config into a validated, fully-defaulted ChatRequest.

use serde_json::Value;

use super::{ChatRequest, MODEL_R1, MODEL_SONAR_PRO, VALID_MODELS, WebSearchOptions};
use crate::config::Config;
use crate::error::SearchError;

/// Default max tokens when neither config nor caller override it.
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Default nucleus sampling threshold.
pub const DEFAULT_TOP_P: f64 = 0.9;

/// Default top-k filtering (0 disables it).
pub const DEFAULT_TOP_K: u32 = 0;

/// Default presence penalty.
pub const DEFAULT_PRESENCE_PENALTY: f64 = 0.0;

/// Default frequency penalty.
pub const DEFAULT_FREQUENCY_PENALTY: f64 = 1.0;

/// Default search context size.
pub const DEFAULT_SEARCH_CONTEXT_SIZE: &str = "medium";

/// Build a chat request from the raw argument bag and process config.
///
/// Defaults resolve lowest to highest: hardcoded, then `Config` overrides,
/// then per-call arguments. `query` is required; a caller-supplied `model`
/// must be in [`VALID_MODELS`]. Every other malformed argument is treated
/// as not provided rather than rejected.
pub fn build_chat_request(args: &Value, config: &Config) -> Result<ChatRequest, SearchError> {
    let query = args
        .get("query")
        .and_then(Value::as_str)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| SearchError::InvalidParams("invalid or empty query parameter".to_string()))?;

    let default_model = config
        .default_model
        .clone()
        .unwrap_or_else(|| MODEL_SONAR_PRO.to_string());
    let default_max_tokens = config.default_max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);
    let default_context_size = config
        .default_search_context_size
        .clone()
        .unwrap_or_else(|| DEFAULT_SEARCH_CONTEXT_SIZE.to_string());

    let mut req = ChatRequest::new(default_model, query);
    req.max_tokens = Some(default_max_tokens);
    req.temperature = Some(DEFAULT_TEMPERATURE);
    req.top_p = Some(DEFAULT_TOP_P);
    req.top_k = Some(DEFAULT_TOP_K);
    req.presence_penalty = Some(DEFAULT_PRESENCE_PENALTY);
    req.frequency_penalty = Some(DEFAULT_FREQUENCY_PENALTY);
    req.stream = Some(false);
    req.return_images = Some(false);
    req.return_related_questions = Some(false);
    req.web_search_options = Some(WebSearchOptions {
        search_context_size: Some(default_context_size),
    });

    // Only caller-supplied models are checked against the closed set;
    // config-sourced models are trusted verbatim. An empty string counts
    // as not supplied.
    if let Some(model) = args
        .get("model")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
    {
        if !VALID_MODELS.contains(&model) {
            return Err(SearchError::InvalidParams(format!("invalid model: {model}")));
        }
        req.model = model.to_string();
    }

    if let Some(max_tokens) = args
        .get("max_tokens")
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
    {
        req.max_tokens = Some(max_tokens);
    }

    if let Some(temperature) = args.get("temperature").and_then(Value::as_f64) {
        req.temperature = Some(temperature);
    }

    if let Some(top_p) = args.get("top_p").and_then(Value::as_f64) {
        req.top_p = Some(top_p);
    }

    // Keep string elements in order; anything else is dropped without
    // leaving a gap.
    if let Some(domains) = args.get("search_domain_filter").and_then(Value::as_array) {
        req.search_domain_filter = domains
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect();
    }

    if let Some(return_images) = args.get("return_images").and_then(Value::as_bool) {
        req.return_images = Some(return_images);
    }

    if let Some(return_related) = args.get("return_related_questions").and_then(Value::as_bool) {
        req.return_related_questions = Some(return_related);
    }

    if let Some(recency) = args
        .get("search_recency_filter")
        .and_then(Value::as_str)
        .filter(|r| !r.is_empty())
    {
        req.search_recency_filter = Some(recency.to_string());
    }

    if let Some(top_k) = args
        .get("top_k")
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
    {
        req.top_k = Some(top_k);
    }

    if let Some(stream) = args.get("stream").and_then(Value::as_bool) {
        req.stream = Some(stream);
    }

    if let Some(presence_penalty) = args.get("presence_penalty").and_then(Value::as_f64) {
        req.presence_penalty = Some(presence_penalty);
    }

    if let Some(frequency_penalty) = args.get("frequency_penalty").and_then(Value::as_f64) {
        req.frequency_penalty = Some(frequency_penalty);
    }

    // Opaque marker; the shape of the caller's object is not interpreted.
    if args.get("response_format").and_then(Value::as_object).is_some() {
        req.response_format = Some(serde_json::json!({}));
    }

    if let Some(options) = args.get("web_search_options").and_then(Value::as_object) {
        if let Some(size) = options.get("search_context_size").and_then(Value::as_str) {
            if matches!(size, "low" | "medium" | "high") {
                req.web_search_options = Some(WebSearchOptions {
                    search_context_size: Some(size.to_string()),
                });
            }
        }
    }

    // The offline model never receives search-shaped parameters, even when
    // the caller asked for them. Must run after every override above.
    if req.model == MODEL_R1 {
        req.search_domain_filter.clear();
        req.return_images = Some(false);
        req.return_related_questions = Some(false);
        req.search_recency_filter = None;
        req.web_search_options = None;
    }

    Ok(req)
}
