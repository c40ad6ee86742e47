//! crawl4ai adapter
//!
//! Converts web pages to markdown or cleaned HTML by delegating to a running
//! crawl4ai service. Tool-facing helpers never fail; errors come back as
//! `Crawl web failed: <reason>` text.

pub mod client;
pub mod config;
pub mod error;

pub use client::{validate_target_url, CrawlClient, CrawlPage};
pub use config::{CrawlConfig, ProxyConfig, DEFAULT_CRAWL4AI_URL};
pub use error::CrawlError;

use tracing::{info, warn};

/// Output flavour requested by a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    Markdown,
    Html,
}

/// Crawl `url` and return the requested flavour as text
pub async fn crawl_to_text(client: &CrawlClient, url: &str, format: PageFormat) -> String {
    match client.crawl(url).await {
        Ok(page) => {
            let text = match format {
                PageFormat::Markdown => page.markdown,
                PageFormat::Html => page.cleaned_html,
            };
            info!("Crawled {} ({:?}, {} bytes)", url, format, text.len());
            text
        }
        Err(e) => {
            warn!("Crawl of {} failed: {}", url, e);
            format!("Crawl web failed: {}", e)
        }
    }
}

pub async fn web_to_md(client: &CrawlClient, url: &str) -> String {
    crawl_to_text(client, url, PageFormat::Markdown).await
}

pub async fn web_to_html(client: &CrawlClient, url: &str) -> String {
    crawl_to_text(client, url, PageFormat::Html).await
}
