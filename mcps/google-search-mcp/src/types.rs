//! Request and result types shared by the validator, backend, and formatter

use serde::{Deserialize, Serialize};

/// Default number of results when the caller does not ask for a count
pub const DEFAULT_NUM_RESULTS: u8 = 5;
/// Smallest accepted result count
pub const MIN_NUM_RESULTS: u8 = 1;
/// Largest accepted result count (Custom Search API page limit)
pub const MAX_NUM_RESULTS: u8 = 10;

/// A validated search request
///
/// Only [`SearchRequest::from_arguments`] builds one, so a backend never sees
/// unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub(crate) query: String,
    pub(crate) num_results: u8,
    pub(crate) region: Option<String>,
}

impl SearchRequest {
    /// The search query, never empty
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of results to request, within `1..=10`
    pub fn num_results(&self) -> u8 {
        self.num_results
    }

    /// The region exactly as the caller sent it
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The region if it is usable as a two-letter code
    pub fn region_code(&self) -> Option<&str> {
        region_code(self.region())
    }
}

/// Keep a region only if it is exactly two characters long
///
/// Other lengths are ignored rather than rejected.
pub fn region_code(region: Option<&str>) -> Option<&str> {
    region.filter(|r| r.chars().count() == 2)
}

/// A single search hit. Any field may be missing from the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Results of one search call, in provider order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SearchResultItem>>,
}

impl SearchResponse {
    pub fn new(items: Vec<SearchResultItem>) -> Self {
        Self { items: Some(items) }
    }

    /// True when items are absent or empty
    pub fn is_empty(&self) -> bool {
        self.items.as_ref().map_or(true, |items| items.is_empty())
    }
}
