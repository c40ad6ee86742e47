//! SearXNG search adapter
//!
//! Sends queries to a SearXNG instance and renders the JSON answer as plain
//! text for a language model to read.

pub mod config;
pub mod error;
pub mod format;
pub mod provider;

pub use config::{SearxngConfig, DEFAULT_LIMIT, DEFAULT_SEARXNG_URL};
pub use error::SearchError;
pub use format::format_results;
pub use provider::{
    validate_query, Infobox, InfoboxUrl, SearchResponse, SearchResult, SearxngProvider,
    WebSearchProvider,
};

use tracing::{info, warn};

/// Run a search and render it; failures become `Search failed: <error>` text
pub async fn search_web(provider: &dyn WebSearchProvider, query: &str, limit: usize) -> String {
    match provider.search(query).await {
        Ok(response) => {
            info!("Search completed for query: {}", query);
            format_results(&response, limit)
        }
        Err(e) => {
            warn!("Search failed for query '{}': {}", query, e);
            format!("Search failed: {}", e)
        }
    }
}
