// CLI error types

use thiserror::Error;
use toolbelt_crawl::CrawlError;
use toolbelt_mcp::ServeError;
use toolbelt_search::SearchError;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Serve(#[from] ServeError),

    #[error("Search setup failed: {0}")]
    Search(#[from] SearchError),

    #[error("Crawl setup failed: {0}")]
    Crawl(#[from] CrawlError),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
