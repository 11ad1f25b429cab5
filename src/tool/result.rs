// ABOUTME: Defines ToolResult - what a tool invocation hands back to the
// ABOUTME: host: answer text, an error flag, and optional metadata.

use std::collections::HashMap;

use serde::Serialize;

/// Outcome of a tool invocation as seen by the hosting collaborator.
///
/// A search invocation produces the synthesized answer text via [`text`],
/// optionally annotated with metadata such as upstream token usage. Hosts
/// that report failures in-band (rather than via `Err`) use [`error`].
///
/// [`text`]: ToolResult::text
/// [`error`]: ToolResult::error
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// The answer text (or error message when `is_error` is set).
    pub content: String,

    /// Whether this result represents an error.
    pub is_error: bool,

    /// Metadata about the invocation, keyed by name. Values that fail to
    /// serialize are dropped.
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ToolResult {
    /// Create a successful text result.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
            metadata: HashMap::new(),
        }
    }

    /// Create an error result carrying a descriptive message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: message.into(),
            is_error: true,
            metadata: HashMap::new(),
        }
    }

    /// Attach a piece of metadata, serialized to JSON.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.metadata.insert(key.into(), v);
        }
        self
    }
}
