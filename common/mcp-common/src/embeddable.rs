//! Embeddable MCP trait for in-process execution
//!
//! [`EmbeddableMcp`] lets a host call an MCP server's tools directly, without
//! spawning it as a subprocess and talking stdio.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//!
//! let tools = server.list_tools();
//! let result = server
//!     .call_tool("search", serde_json::json!({ "query": "rust" }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// Tool was not found in the server
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Invalid parameters passed to the tool
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Trait for MCP servers that can be executed in-process
///
/// Implementations must be `Send + Sync` so tools can be called from
/// concurrent tasks. Outcomes the server reports as tool content (including
/// failures it chooses to render as text) come back as `Ok`.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Server name, matching the name used in MCP configuration files
    fn server_name(&self) -> &str;

    /// All tools with their name, description, and input schema
    fn list_tools(&self) -> Vec<Tool>;

    /// Execute a tool by name with a JSON arguments object
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    /// Optional human-readable description of the server
    fn server_description(&self) -> Option<&str> {
        None
    }

    /// Server version, if available
    fn server_version(&self) -> Option<&str> {
        None
    }
}
