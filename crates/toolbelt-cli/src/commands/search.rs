//! Search command - serve the SearXNG search tool

use crate::commands::{Command, ServeArgs};
use crate::error::CliResult;
use std::sync::Arc;
use toolbelt_mcp::{serve, SearchServer};
use toolbelt_search::{SearxngConfig, SearxngProvider};
use tracing::info;

pub struct SearchCommand {
    config: SearxngConfig,
    serve: ServeArgs,
}

impl SearchCommand {
    pub fn new(config: SearxngConfig, serve: ServeArgs) -> Self {
        Self { config, serve }
    }
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> CliResult<()> {
        let transport = self.serve.default_transport()?;
        let provider = SearxngProvider::new(self.config.clone())?;
        info!("Forwarding searches to {}", provider.endpoint());

        serve(SearchServer::new(Arc::new(provider)), transport).await?;
        Ok(())
    }
}
