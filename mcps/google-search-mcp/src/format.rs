//! Plain-text rendering of search results

use crate::types::{region_code, SearchResponse, SearchResultItem};

/// Text returned when the provider has nothing for the query
pub const NO_RESULTS: &str = "No results found.";

/// Render a response as numbered result blocks
///
/// A two-letter `region` adds a `Search results for region: XX` header.
/// Missing fields fall back to `No title`, `No URL` and `No description`
/// independently.
pub fn format_results(response: &SearchResponse, region: Option<&str>) -> String {
    let items = match response.items.as_deref() {
        Some(items) if !items.is_empty() => items,
        _ => return NO_RESULTS.to_string(),
    };

    let header = region_code(region)
        .map(|code| format!("Search results for region: {}\n\n", code.to_uppercase()))
        .unwrap_or_default();

    let blocks = items
        .iter()
        .enumerate()
        .map(|(i, item)| format_item(i + 1, item))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{}{}", header, blocks)
}

fn format_item(n: usize, item: &SearchResultItem) -> String {
    format!(
        "Result {}:\nTitle: {}\nURL: {}\nDescription: {}\n---",
        n,
        item.title.as_deref().unwrap_or("No title"),
        item.url.as_deref().unwrap_or("No URL"),
        item.snippet.as_deref().unwrap_or("No description"),
    )
}
