//! Google Search MCP Server
//!
//! Web search via Google Programmable Search, served over stdio.
//!
//! # Configuration
//! `GOOGLE_API_KEY` and `GOOGLE_SEARCH_ENGINE_ID` must be set; the server
//! exits before opening the transport if either is missing.

use google_search_mcp::{Config, GoogleSearchMcpServer};
use rmcp::{transport::stdio, ServiceExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("google_search_mcp")?;

    tracing::info!("Starting Google Search MCP Server");

    let config = Config::from_env().inspect_err(|e| tracing::error!("{}", e))?;
    tracing::info!(
        "Search engine: {} via {}",
        config.search_engine_id(),
        config.endpoint()
    );

    let server = GoogleSearchMcpServer::new(config)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
