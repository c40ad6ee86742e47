//! Crawl command - serve the crawl4ai page conversion tools

use crate::commands::{Command, ServeArgs};
use crate::error::CliResult;
use toolbelt_crawl::{CrawlClient, CrawlConfig};
use toolbelt_mcp::transport::DEFAULT_CRAWL_PORT;
use toolbelt_mcp::{serve, CrawlServer};
use tracing::info;

pub struct CrawlCommand {
    config: CrawlConfig,
    serve: ServeArgs,
}

impl CrawlCommand {
    pub fn new(config: CrawlConfig, serve: ServeArgs) -> Self {
        Self { config, serve }
    }
}

#[async_trait::async_trait]
impl Command for CrawlCommand {
    async fn execute(&self) -> CliResult<()> {
        let transport = self.serve.transport(DEFAULT_CRAWL_PORT)?;
        let client = CrawlClient::new(self.config.clone())?;
        info!("Forwarding crawls to {}", client.endpoint());
        if let Some(proxy) = &self.config.proxy {
            info!("Crawler browser proxy: {}", proxy.server);
        }

        serve(CrawlServer::new(client), transport).await?;
        Ok(())
    }
}
