// ABOUTME: Defines the Tool trait - the contract between this crate and the
// ABOUTME: hosting collaborator that dispatches tool invocations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ToolResult;

/// A tool that can be executed by a hosting agent runtime.
///
/// The host hands over a free-form JSON argument bag and gets back either a
/// text result or an error; transport framing, concurrency dispatch, and
/// process lifecycle are the host's concern.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the host to surface.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for the tool's input parameters.
    fn schema(&self) -> serde_json::Value;

    /// Check if this invocation requires user approval.
    fn requires_approval(&self, _params: &serde_json::Value) -> bool {
        false
    }

    /// Execute the tool with the given parameters.
    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error>;
}

/// Discovery metadata for a tool, as handed to the hosting collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}
