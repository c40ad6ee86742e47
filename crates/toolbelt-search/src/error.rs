//! Search error types

use thiserror::Error;

/// Errors that can occur during search operations
#[derive(Error, Debug)]
pub enum SearchError {
    /// Query was empty or whitespace
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// Configured base URL is unusable
    #[error("Invalid SearXNG URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP request to SearXNG failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// SearXNG answered with a non-success status
    #[error("SearXNG returned HTTP {status}")]
    Status { status: u16 },

    /// Failed to decode the JSON answer
    #[error("Failed to parse search results: {0}")]
    Parse(String),
}
