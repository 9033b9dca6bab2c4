//! Search backend implementations
//!
//! The server talks to its provider through [`SearchBackend`]; Google
//! Programmable Search is the only production implementation.

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{SearchRequest, SearchResponse};

pub mod google;

/// Trait for search backends
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Get the name of this backend
    fn name(&self) -> &str;

    /// Perform exactly one search call
    ///
    /// Provider and transport failures are returned as errors, never
    /// converted into empty results.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;
}
