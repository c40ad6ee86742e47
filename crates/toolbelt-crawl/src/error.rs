//! Crawl error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    /// Target or service URL is malformed or not http(s)
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// crawl4ai answered with a non-success status
    #[error("crawl4ai returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse crawl response: {0}")]
    Parse(String),

    /// crawl4ai ran but reported the page as failed
    #[error("{0}")]
    Failed(String),

    /// Response carried no page results
    #[error("crawl4ai returned no results")]
    EmptyResult,
}
