//! Result helpers for MCP tool responses

use rmcp::model::{CallToolResult, Content, RawContent};

/// Create a successful plain text response
///
/// ```rust,ignore
/// use mcp_common::text_success;
///
/// fn my_tool(&self) -> Result<CallToolResult, McpError> {
///     Ok(text_success("Operation completed successfully"))
/// }
/// ```
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Return the first text block of a tool result, if any
///
/// Useful for embedders and tests that only care about the rendered text.
pub fn first_text(result: &CallToolResult) -> Option<&str> {
    result.content.iter().find_map(|c| match &c.raw {
        RawContent::Text(t) => Some(t.text.as_str()),
        _ => None,
    })
}
