//! MCP Server implementation for Google search
//!
//! Exposes a single `search` tool. The handler is written by hand rather than
//! through the tool router so that argument checking reports every invalid
//! field and provider failures come back as readable tool output.

use std::sync::Arc;

use anyhow::Result;
use mcp_common::{
    async_trait, invalid_params, text_success, EmbeddableError, EmbeddableMcp, EmbeddableResult,
    IntoMcpError, McpError, McpResult, ResultExt,
};
use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam,
        ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    RoleServer, ServerHandler,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::backends::{google::GoogleBackend, SearchBackend};
use crate::config::Config;
use crate::format::format_results;
use crate::types::{SearchRequest, DEFAULT_NUM_RESULTS};
use crate::validation::ValidationError;

/// Name of the only tool this server exposes
pub const SEARCH_TOOL: &str = "search";

const SEARCH_DESCRIPTION: &str = "Search the web using Google Programmable Search. \
     Returns numbered results with title, URL, and description.";

const INSTRUCTIONS: &str = "Google Search MCP Server - provides a `search` tool backed by \
     Google Programmable Search. Pass `country` as a two-letter region code to bias results.";

/// The main Google Search MCP Server
#[derive(Clone)]
pub struct GoogleSearchMcpServer {
    backend: Arc<dyn SearchBackend>,
}

// ============================================================================
// Parameter Types
// ============================================================================

// Input shape of the `search` tool, used only for its advertised schema.
// Incoming arguments are checked by `SearchRequest::from_arguments`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(description = "Arguments for a Google web search")]
pub struct SearchParams {
    #[schemars(description = "The search query")]
    pub query: String,
    #[serde(default = "default_num_results")]
    #[schemars(description = "Number of results to return (1-10, default: 5)")]
    #[schemars(range(min = 1, max = 10))]
    pub num_results: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Two-letter region code to bias results (e.g. us, gb, de)")]
    #[schemars(transform = non_nullable)]
    pub country: Option<String>,
}

fn default_num_results() -> u8 {
    DEFAULT_NUM_RESULTS
}

/// Drop `null` from a schema's `type` list; the validator rejects `null`
fn non_nullable(schema: &mut schemars::Schema) {
    let single = match schema.get_mut("type") {
        Some(Value::Array(types)) => {
            types.retain(|t| t.as_str() != Some("null"));
            (types.len() == 1).then(|| types[0].clone())
        }
        _ => None,
    };

    if let Some(ty) = single {
        schema.insert("type".to_string(), ty);
    }
}

/// Why a tool call was refused before any search ran
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] ValidationError),
}

impl IntoMcpError for ToolError {
    fn into_mcp_error(self) -> McpError {
        invalid_params(self.to_string())
    }
}

impl From<ToolError> for EmbeddableError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::UnknownTool(name) => EmbeddableError::ToolNotFound(name),
            ToolError::InvalidArguments(e) => EmbeddableError::InvalidParams(e.to_string()),
        }
    }
}

fn search_tool() -> Tool {
    let schema = schemars::schema_for!(SearchParams);
    let input_schema = schema.as_object().cloned().unwrap_or_default();
    Tool::new(SEARCH_TOOL, SEARCH_DESCRIPTION, Arc::new(input_schema))
}

impl GoogleSearchMcpServer {
    pub fn new(config: Config) -> Result<Self> {
        let backend = GoogleBackend::new(config)?;
        tracing::info!("Using {} backend", backend.name());
        Ok(Self::with_backend(Arc::new(backend)))
    }

    /// Build a server around any backend (used by tests and embedders)
    pub fn with_backend(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Route one tool call
    ///
    /// Unknown tools and invalid arguments are errors. A failed search is
    /// not: it becomes `Search failed: <message>` text.
    pub async fn dispatch(&self, name: &str, arguments: Value) -> Result<CallToolResult, ToolError> {
        if name != SEARCH_TOOL {
            tracing::warn!("Rejected call to unknown tool '{}'", name);
            return Err(ToolError::UnknownTool(name.to_string()));
        }

        let request = SearchRequest::from_arguments(&arguments).inspect_err(|e| {
            tracing::warn!("Rejected search arguments: {}", e);
        })?;

        Ok(self.search(&request).await)
    }

    async fn search(&self, request: &SearchRequest) -> CallToolResult {
        tracing::info!(
            "Searching for: {} (num: {}, region: {:?})",
            request.query(),
            request.num_results(),
            request.region()
        );

        match self.backend.search(request).await {
            Ok(response) => text_success(format_results(&response, request.region())),
            Err(e) => text_success(format!("Search failed: {}", e)),
        }
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

impl ServerHandler for GoogleSearchMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<ListToolsResult> {
        Ok(ListToolsResult::with_all_items(vec![search_tool()]))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<CallToolResult> {
        let arguments = Value::Object(request.arguments.unwrap_or_else(Map::new));
        self.dispatch(&request.name, arguments).await.to_mcp_err()
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for GoogleSearchMcpServer {
    fn server_name(&self) -> &str {
        "google-search"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        vec![search_tool()]
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        self.dispatch(name, params).await.map_err(Into::into)
    }
}
