// ABOUTME: Defines all error types for the perplexity-search library using thiserror.
// ABOUTME: Every failure mode is terminal for the invocation - nothing is retried.

/// Errors from building or executing a search request.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Process configuration is unusable (e.g. missing API key).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The caller-supplied argument bag failed validation.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Network-level failure reaching the upstream API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-200 status; carries the raw body for diagnostics.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Upstream body was not the expected JSON shape.
    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Upstream answered 200 but carried no choices.
    #[error("Response contained no choices")]
    EmptyResponse,
}
