// ABOUTME: Process-wide configuration - API key plus optional default overrides.
// ABOUTME: Environment reading is confined to from_env so tests can construct directly.

use crate::error::SearchError;

/// Environment variable holding the Perplexity API key.
pub const API_KEY_ENV: &str = "PERPLEXITY_API_KEY";

/// Environment variable overriding the default model.
pub const MODEL_ENV: &str = "PERPLEXITY_MODEL";

/// Environment variable overriding the default max token count.
pub const MAX_TOKENS_ENV: &str = "DEFAULT_MAX_TOKENS";

/// Environment variable overriding the default search context size.
pub const SEARCH_CONTEXT_SIZE_ENV: &str = "DEFAULT_SEARCH_CONTEXT_SIZE";

/// Immutable configuration threaded into the request builder and client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the Perplexity API.
    pub api_key: String,

    /// Default model override. Trusted verbatim - only caller-supplied
    /// models are validated against the closed set.
    pub default_model: Option<String>,

    /// Default max token count override.
    pub default_max_tokens: Option<u32>,

    /// Default search context size override.
    pub default_search_context_size: Option<String>,
}

impl Config {
    /// Create a configuration with just an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            default_model: None,
            default_max_tokens: None,
            default_search_context_size: None,
        }
    }

    /// Read configuration from the environment.
    ///
    /// The API key is required; the three default overrides are optional.
    /// An unparseable max-token override is ignored with a warning rather
    /// than failing the process.
    pub fn from_env() -> Result<Self, SearchError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                SearchError::Configuration(format!("{} environment variable not set", API_KEY_ENV))
            })?;

        let default_model = std::env::var(MODEL_ENV).ok().filter(|m| !m.is_empty());

        let default_max_tokens = std::env::var(MAX_TOKENS_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .and_then(|v| parse_max_tokens(&v));

        let default_search_context_size = std::env::var(SEARCH_CONTEXT_SIZE_ENV)
            .ok()
            .filter(|s| !s.is_empty());

        Ok(Self {
            api_key,
            default_model,
            default_max_tokens,
            default_search_context_size,
        })
    }

    /// Set the default model override.
    pub fn default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    /// Set the default max token override.
    pub fn default_max_tokens(mut self, max_tokens: u32) -> Self {
        self.default_max_tokens = Some(max_tokens);
        self
    }

    /// Set the default search context size override.
    pub fn default_search_context_size(mut self, size: impl Into<String>) -> Self {
        self.default_search_context_size = Some(size.into());
        self
    }
}

/// Parse a max-token override, warning on garbage instead of failing.
fn parse_max_tokens(raw: &str) -> Option<u32> {
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("Invalid {} value: {}", MAX_TOKENS_ENV, raw);
            None
        }
    }
}
