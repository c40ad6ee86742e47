//! Web search provider trait and the SearXNG implementation

use crate::config::SearxngConfig;
use crate::error::SearchError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// One organic search hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoboxUrl {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// Knowledge-panel style summary returned alongside results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infobox {
    #[serde(default)]
    pub infobox: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub urls: Vec<InfoboxUrl>,
}

/// SearXNG JSON answer (`format=json`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub number_of_results: u64,
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub infoboxes: Vec<Infobox>,
}

/// Trait for web search providers
#[async_trait]
pub trait WebSearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError>;
}

/// Reject empty or whitespace-only queries before any request is made
pub fn validate_query(query: &str) -> Result<(), SearchError> {
    if query.trim().is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    Ok(())
}

/// `SearXNG` search provider
pub struct SearxngProvider {
    client: Client,
    endpoint: Url,
    config: SearxngConfig,
}

impl SearxngProvider {
    /// Build a provider with its own timeout-bound HTTP client
    pub fn new(config: SearxngConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Self::with_client(client, config)
    }

    pub fn with_client(client: Client, config: SearxngConfig) -> Result<Self, SearchError> {
        let endpoint = search_endpoint(&config.url)?;
        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn search_endpoint(base: &str) -> Result<Url, SearchError> {
    let invalid = |reason: String| SearchError::InvalidUrl {
        url: base.to_string(),
        reason,
    };

    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    // Keep any path prefix the instance is mounted under
    let path = format!("{}/search", url.path().trim_end_matches('/'));
    url.set_path(&path);
    Ok(url)
}

#[async_trait]
impl WebSearchProvider for SearxngProvider {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        validate_query(query)?;
        debug!("Querying SearXNG at {} for '{}'", self.endpoint, query);

        let mut request = self
            .client
            .get(self.endpoint.clone())
            .query(&[("q", query), ("format", "json")]);

        if let Some((user, password)) = self.config.credentials() {
            request = request.basic_auth(user, Some(password));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Parse(e.to_string()))?;

        debug!(
            "SearXNG returned {} results and {} infoboxes",
            parsed.results.len(),
            parsed.infoboxes.len()
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(uri: String) -> SearxngProvider {
        SearxngProvider::new(SearxngConfig::new(uri)).unwrap()
    }

    #[test]
    fn endpoint_keeps_mount_prefix() {
        assert_eq!(
            search_endpoint("http://localhost:8080").unwrap().as_str(),
            "http://localhost:8080/search"
        );
        assert_eq!(
            search_endpoint("https://example.com/searx/").unwrap().as_str(),
            "https://example.com/searx/search"
        );
    }

    #[test]
    fn endpoint_rejects_bad_urls() {
        assert!(matches!(
            search_endpoint("not a url"),
            Err(SearchError::InvalidUrl { .. })
        ));
        assert!(matches!(
            search_endpoint("ftp://example.com"),
            Err(SearchError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn validate_query_rejects_blank() {
        assert!(matches!(validate_query("   "), Err(SearchError::EmptyQuery)));
        assert!(validate_query("rust").is_ok());
    }

    #[tokio::test]
    async fn search_decodes_results_and_infoboxes() {
        let mock_server = MockServer::start().await;

        let response_json = r#"{
            "query": "rust",
            "number_of_results": 2,
            "results": [
                {"title": "Rust", "url": "https://www.rust-lang.org", "content": "Reliable software", "engine": "ddg"},
                {"title": "Rust Book", "url": "https://doc.rust-lang.org/book"}
            ],
            "infoboxes": [
                {"infobox": "Rust", "id": "rust", "content": "Language", "urls": [{"title": "Home", "url": "https://www.rust-lang.org"}]}
            ],
            "suggestions": []
        }"#;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "rust"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(response_json))
            .mount(&mock_server)
            .await;

        let response = provider(mock_server.uri()).search("rust").await.unwrap();

        assert_eq!(response.number_of_results, 2);
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].content, "Reliable software");
        assert_eq!(response.results[1].content, "");
        assert_eq!(response.infoboxes[0].urls[0].title, "Home");
    }

    #[tokio::test]
    async fn search_sends_basic_auth_when_configured() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results": []}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = SearxngConfig {
            auth_user: Some("user".to_string()),
            auth_password: Some("pass".to_string()),
            ..SearxngConfig::new(mock_server.uri())
        };
        let provider = SearxngProvider::new(config).unwrap();

        let response = provider.search("query").await.unwrap();
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let err = provider(mock_server.uri()).search("rust").await.unwrap_err();
        assert!(matches!(err, SearchError::Status { status: 429 }));
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&mock_server)
            .await;

        let err = provider(mock_server.uri()).search("rust").await.unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[tokio::test]
    async fn empty_query_never_reaches_server() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = provider(mock_server.uri()).search("  ").await.unwrap_err();
        assert!(matches!(err, SearchError::EmptyQuery));
    }
}
