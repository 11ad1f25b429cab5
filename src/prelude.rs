// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use perplexity_search::prelude::*;` to get started quickly.

pub use crate::config::Config;
pub use crate::error::SearchError;
pub use crate::perplexity::{
    ChatMessage, ChatOutcome, ChatRequest, ChatResponse, PerplexityClient, WebSearchOptions,
    build_chat_request,
};
pub use crate::tool::{Registry, Tool, ToolDefinition, ToolResult};
pub use crate::tools::PerplexitySearchTool;
