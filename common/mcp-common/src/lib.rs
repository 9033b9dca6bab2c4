//! MCP Common - Shared utilities for MCP servers
//!
//! - **Initialization**: [`init_tracing`] sets up stderr logging (stdout belongs to the protocol)
//! - **Results**: helpers for building and reading `CallToolResult` text content
//! - **Errors**: [`IntoMcpError`] and [`ResultExt`] for converting domain errors
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{invalid_params, text_success, McpResult};
//! use rmcp::model::CallToolResult;
//!
//! fn my_tool(&self, query: &str) -> McpResult<CallToolResult> {
//!     if query.is_empty() {
//!         return Err(invalid_params("query cannot be empty"));
//!     }
//!     Ok(text_success(format!("searched for {query}")))
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, IntoMcpError, McpResult, ResultExt};
pub use init::{init_tracing, LogFormat};
pub use result::{first_text, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
