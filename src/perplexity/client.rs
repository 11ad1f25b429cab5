// ABOUTME: Client for the Perplexity chat completions API.
// ABOUTME: One unretried POST per request; returns the first choice's text.

use super::{ChatRequest, ChatResponse, UsageStats};
use crate::error::SearchError;

const PERPLEXITY_API_URL: &str = "https://api.perplexity.ai";

/// Outcome of a successful chat call.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    /// Text of the first choice.
    pub content: String,

    /// Token usage counters, when the API reported them.
    pub usage: Option<UsageStats>,
}

/// Client for the Perplexity API.
#[derive(Debug, Clone)]
pub struct PerplexityClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl PerplexityClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: PERPLEXITY_API_URL.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Point the client at a different base URL. Used by tests to target a
    /// local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Execute a chat request and return the first choice's text.
    ///
    /// A single attempt: transport failures, non-200 statuses, undecodable
    /// bodies, and empty choice lists all surface as errors, never as
    /// partial results.
    pub async fn chat(&self, req: &ChatRequest) -> Result<ChatOutcome, SearchError> {
        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(req)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            // Body read is best-effort; diagnostics only.
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let chat_resp: ChatResponse = serde_json::from_str(&body)?;

        let usage = chat_resp.usage;
        let choice = chat_resp
            .choices
            .into_iter()
            .next()
            .ok_or(SearchError::EmptyResponse)?;

        Ok(ChatOutcome {
            content: choice.message.content,
            usage,
        })
    }
}
