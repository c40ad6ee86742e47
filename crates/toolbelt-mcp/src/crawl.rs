//! crawl4ai MCP server

use crate::response::tool_text_result;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    schemars::JsonSchema,
    tool, tool_handler, tool_router, ErrorData, ServerHandler,
};
use std::sync::Arc;
use toolbelt_crawl::{crawl_to_text, CrawlClient, PageFormat};

#[derive(Debug, serde::Deserialize, JsonSchema)]
pub struct WebPageInput {
    /// Absolute http(s) URL of the page
    pub url: String,
}

#[derive(Clone)]
pub struct CrawlServer {
    client: Arc<CrawlClient>,
    tool_router: ToolRouter<CrawlServer>,
}

impl CrawlServer {
    pub fn new(client: CrawlClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl CrawlServer {
    #[tool(name = "web_to_md", description = "Convert web page to markdown content.")]
    async fn web_to_md(
        &self,
        Parameters(input): Parameters<WebPageInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = crawl_to_text(&self.client, &input.url, PageFormat::Markdown).await;
        Ok(tool_text_result(text))
    }

    #[tool(name = "web_to_html", description = "Convert web page to html content.")]
    async fn web_to_html(
        &self,
        Parameters(input): Parameters<WebPageInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = crawl_to_text(&self.client, &input.url, PageFormat::Html).await;
        Ok(tool_text_result(text))
    }
}

#[tool_handler]
impl ServerHandler for CrawlServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
