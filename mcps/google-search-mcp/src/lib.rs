//! Google Search MCP Library
//!
//! A single `search` tool over Google Programmable Search (Custom Search JSON API).
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use google_search_mcp::{Config, EmbeddableMcp, GoogleSearchMcpServer};
//!
//! let server = GoogleSearchMcpServer::new(Config::from_env()?)?;
//! let result = server
//!     .call_tool("search", serde_json::json!({ "query": "rust", "country": "gb" }))
//!     .await?;
//! ```
//!
//! # Configuration
//! Set `GOOGLE_API_KEY` and `GOOGLE_SEARCH_ENGINE_ID`; optionally
//! `GOOGLE_SEARCH_ENDPOINT` to point at a different API host.

pub mod backends;
pub mod config;
pub mod format;
pub mod server;
pub mod types;
pub mod validation;

// Re-export main server type
pub use server::{GoogleSearchMcpServer, SearchParams, ToolError, SEARCH_TOOL};

pub use config::{Config, ConfigError};
pub use format::format_results;
pub use types::{SearchRequest, SearchResponse, SearchResultItem};
pub use validation::ValidationError;

// Re-export EmbeddableMcp trait for in-process usage
pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
