//! Google Programmable Search backend
//!
//! Implements the SearchBackend trait using the Custom Search JSON API.
//! See: https://developers.google.com/custom-search/v1/reference/rest/v1/cse/list

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::SearchBackend;
use crate::config::Config;
use crate::types::{SearchRequest, SearchResponse, SearchResultItem};

/// Google Custom Search backend
pub struct GoogleBackend {
    client: Client,
    config: Config,
}

impl GoogleBackend {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("google-search-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Query string for one `cse.list` call
    fn query_params(&self, request: &SearchRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("key", self.config.api_key().to_string()),
            ("cx", self.config.search_engine_id().to_string()),
            ("q", request.query().to_string()),
            ("num", request.num_results().to_string()),
        ];

        if let Some(code) = request.region_code() {
            params.push(("gl", code.to_lowercase()));
        }

        params
    }

    async fn execute(&self, request: &SearchRequest) -> Result<SearchResponse> {
        // reqwest errors embed the request URL, which carries the API key
        let response = self
            .client
            .get(self.config.endpoint().clone())
            .query(&self.query_params(request))
            .send()
            .await
            .map_err(|e| anyhow!(e.without_url()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|e| e.without_url().to_string());
            return Err(api_error(status, &text));
        }

        let google_response: GoogleResponse = response
            .json()
            .await
            .map_err(|e| anyhow!(e.without_url()))?;

        Ok(google_response.into())
    }
}

// Custom Search API response types
#[derive(Debug, Deserialize)]
struct GoogleResponse {
    items: Option<Vec<GoogleItem>>,
}

#[derive(Debug, Deserialize)]
struct GoogleItem {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

impl From<GoogleResponse> for SearchResponse {
    fn from(response: GoogleResponse) -> Self {
        SearchResponse {
            items: response.items.map(|items| {
                items
                    .into_iter()
                    .map(|item| SearchResultItem {
                        title: item.title,
                        url: item.link,
                        snippet: item.snippet,
                    })
                    .collect()
            }),
        }
    }
}

/// Prefer the provider's own message (e.g. "Quota exceeded ...") over the raw body
fn api_error(status: reqwest::StatusCode, body: &str) -> anyhow::Error {
    match serde_json::from_str::<GoogleErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => anyhow!(envelope.error.message),
        _ => anyhow!("Google Search API error {}: {}", status, body),
    }
}

#[async_trait]
impl SearchBackend for GoogleBackend {
    fn name(&self) -> &str {
        "google"
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        match self.execute(request).await {
            Ok(response) => {
                tracing::debug!(
                    "Google returned {} result(s)",
                    response.items.as_ref().map_or(0, Vec::len)
                );
                Ok(response)
            }
            Err(e) => {
                tracing::error!("Google search failed for '{}': {}", request.query(), e);
                Err(e)
            }
        }
    }
}
