// ABOUTME: PerplexitySearchTool - performs web searches via the Perplexity
// ABOUTME: chat completions API and returns the synthesized answer text.

use async_trait::async_trait;

use crate::config::Config;
use crate::error::SearchError;
use crate::perplexity::{PerplexityClient, build_chat_request};
use crate::tool::{Tool, ToolResult};

/// Tool for performing web searches with Perplexity.
pub struct PerplexitySearchTool {
    config: Config,
    client: PerplexityClient,
}

impl PerplexitySearchTool {
    /// Create the tool from an explicit configuration.
    pub fn new(config: Config) -> Self {
        let client = PerplexityClient::new(config.api_key.clone());
        Self { config, client }
    }

    /// Create the tool from the environment. Fails when the API key is
    /// not set.
    pub fn from_env() -> Result<Self, SearchError> {
        Ok(Self::new(Config::from_env()?))
    }

    /// Replace the client. Used by tests to target a mock server.
    pub fn with_client(mut self, client: PerplexityClient) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl Tool for PerplexitySearchTool {
    fn name(&self) -> &str {
        "perplexity_search"
    }

    fn description(&self) -> &str {
        "Perform web search using Perplexity API and return results"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query string"
                },
                "model": {
                    "type": "string",
                    "description": "Model to use for the search. Options include:\n\
                        - sonar-pro: Advanced search offering with grounding (default)\n\
                        - sonar: Lightweight, cost-effective search model\n\
                        - sonar-deep-research: Expert-level research model for comprehensive reports\n\
                        - sonar-reasoning-pro: Premier reasoning model with Chain of Thought\n\
                        - sonar-reasoning: Fast, real-time reasoning model\n\
                        - r1-1776: Offline chat model (no search capability)",
                    "enum": crate::perplexity::VALID_MODELS
                },
                "search_recency_filter": {
                    "type": "string",
                    "description": "Filter search results by recency (options: month, week, day, hour)",
                    "enum": ["month", "week", "day", "hour"]
                },
                "max_tokens": {
                    "type": "number",
                    "description": "Maximum number of tokens returned by the API (max 8k for sonar-pro)"
                },
                "temperature": {
                    "type": "number",
                    "description": "Amount of randomness in the response, valued between 0 and 2",
                    "default": 0.2
                },
                "top_p": {
                    "type": "number",
                    "description": "Nucleus sampling threshold, valued between 0 and 1",
                    "default": 0.9
                },
                "search_domain_filter": {
                    "type": "array",
                    "description": "List of domains to limit search results to"
                },
                "return_images": {
                    "type": "boolean",
                    "description": "Whether search results should include images"
                },
                "return_related_questions": {
                    "type": "boolean",
                    "description": "Whether related questions should be returned"
                },
                "top_k": {
                    "type": "number",
                    "description": "Number of tokens to keep for top-k filtering",
                    "default": 0
                },
                "stream": {
                    "type": "boolean",
                    "description": "Whether to stream the response incrementally"
                },
                "presence_penalty": {
                    "type": "number",
                    "description": "Positive values increase the likelihood of discussing new topics",
                    "default": 0
                },
                "frequency_penalty": {
                    "type": "number",
                    "description": "Decreases likelihood of repetition based on prior frequency",
                    "default": 1
                },
                "web_search_options": {
                    "type": "object",
                    "description": "Configuration for using web search in model responses. The \
                        'search_context_size' property can be set to 'low', 'medium', or 'high' \
                        to control how much search context is retrieved (default: medium)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        let request = build_chat_request(&params, &self.config)?;
        let outcome = self.client.chat(&request).await?;

        let mut result = ToolResult::text(outcome.content);
        if let Some(usage) = outcome.usage {
            result = result.with_metadata("usage", usage);
        }
        Ok(result)
    }
}
