//! SearXNG MCP server

use crate::response::tool_text_result;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    schemars::JsonSchema,
    tool, tool_handler, tool_router, ErrorData, ServerHandler,
};
use std::sync::Arc;
use toolbelt_search::{WebSearchProvider, DEFAULT_LIMIT};

#[derive(Debug, serde::Deserialize, JsonSchema)]
pub struct SearchWebInput {
    /// Search query
    pub query: String,
    /// Maximum number of results to return (default 3)
    pub limit: Option<usize>,
}

#[derive(Clone)]
pub struct SearchServer {
    provider: Arc<dyn WebSearchProvider>,
    tool_router: ToolRouter<SearchServer>,
}

impl SearchServer {
    pub fn new(provider: Arc<dyn WebSearchProvider>) -> Self {
        Self {
            provider,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl SearchServer {
    #[tool(
        name = "search_web",
        description = "Search the web using SearXNG and return formatted results."
    )]
    async fn search_web(
        &self,
        Parameters(input): Parameters<SearchWebInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let limit = input.limit.unwrap_or(DEFAULT_LIMIT);
        let text = toolbelt_search::search_web(self.provider.as_ref(), &input.query, limit).await;
        Ok(tool_text_result(text))
    }
}

#[tool_handler]
impl ServerHandler for SearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbelt_search::{SearxngConfig, SearxngProvider};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn text(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).unwrap();
        value["content"][0]["text"].as_str().unwrap().to_string()
    }

    fn server(uri: String) -> SearchServer {
        let provider = SearxngProvider::new(SearxngConfig::new(uri)).unwrap();
        SearchServer::new(Arc::new(provider))
    }

    #[test]
    fn search_tool_inventory() {
        let router = SearchServer::tool_router();
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "search_web");

        let schema = tools[0].input_schema.as_ref();
        assert_eq!(
            schema.get("type").and_then(|value| value.as_str()),
            Some("object")
        );
        assert!(schema.contains_key("properties"));
        assert_eq!(schema["required"], serde_json::json!(["query"]));
    }

    #[tokio::test]
    async fn search_web_uses_default_limit() {
        let mock_server = MockServer::start().await;
        let results: Vec<_> = (1..=5)
            .map(|i| {
                serde_json::json!({
                    "title": format!("Result {}", i),
                    "url": format!("https://example.com/{}", i),
                    "content": "snippet"
                })
            })
            .collect();

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "rust"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"query": "rust", "results": results})),
            )
            .mount(&mock_server)
            .await;

        let server = server(mock_server.uri());
        let result = server
            .search_web(Parameters(SearchWebInput {
                query: "rust".to_string(),
                limit: None,
            }))
            .await
            .unwrap();

        let output = text(&result);
        assert!(output.contains("Title: Result 3"));
        assert!(!output.contains("Title: Result 4"));
    }

    #[tokio::test]
    async fn search_failure_is_text_not_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let result = server(mock_server.uri())
            .search_web(Parameters(SearchWebInput {
                query: "rust".to_string(),
                limit: Some(1),
            }))
            .await
            .unwrap();

        assert_eq!(text(&result), "Search failed: SearXNG returned HTTP 503");
    }
}
