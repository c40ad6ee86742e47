//! crawl4ai REST client
//!
//! Talks to the crawl4ai server's `POST /crawl` endpoint. Browser and run
//! settings are sent as typed config objects (`{"type": ..., "params": ...}`)
//! the way the server expects them.

use crate::config::{CrawlConfig, ProxyConfig};
use crate::error::CrawlError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Converted content of one crawled page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlPage {
    pub url: String,
    pub markdown: String,
    pub cleaned_html: String,
}

#[derive(Serialize)]
struct Typed<T> {
    #[serde(rename = "type")]
    kind: &'static str,
    params: T,
}

#[derive(Serialize)]
struct BrowserParams<'a> {
    enable_stealth: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    proxy_config: Option<Typed<&'a ProxyConfig>>,
}

#[derive(Serialize)]
struct CrawlerParams {
    cache_mode: &'static str,
    magic: bool,
    simulate_user: bool,
    override_navigator: bool,
}

#[derive(Serialize)]
struct CrawlRequest<'a> {
    urls: [&'a str; 1],
    browser_config: Typed<BrowserParams<'a>>,
    crawler_config: Typed<CrawlerParams>,
}

#[derive(Deserialize)]
struct CrawlResponse {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    results: Vec<RawPage>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct RawPage {
    #[serde(default)]
    url: String,
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    markdown: Option<MarkdownField>,
    #[serde(default)]
    cleaned_html: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

/// Older servers return a string, newer ones a generation object
#[derive(Deserialize)]
#[serde(untagged)]
enum MarkdownField {
    Text(String),
    Generated {
        #[serde(default)]
        raw_markdown: String,
    },
}

impl MarkdownField {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Generated { raw_markdown } => raw_markdown,
        }
    }
}

fn default_success() -> bool {
    true
}

/// Accept only absolute http(s) URLs
pub fn validate_target_url(url: &str) -> Result<Url, CrawlError> {
    let invalid = |reason: String| CrawlError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(invalid(format!(
            "unsupported scheme '{}', only http and https are allowed",
            other
        ))),
    }
}

pub struct CrawlClient {
    client: Client,
    endpoint: Url,
    config: CrawlConfig,
}

impl CrawlClient {
    pub fn new(config: CrawlConfig) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Self::with_client(client, config)
    }

    pub fn with_client(client: Client, config: CrawlConfig) -> Result<Self, CrawlError> {
        let mut endpoint = validate_target_url(&config.url)?;
        let path = format!("{}/crawl", endpoint.path().trim_end_matches('/'));
        endpoint.set_path(&path);
        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request_body<'a>(&'a self, url: &'a str) -> CrawlRequest<'a> {
        CrawlRequest {
            urls: [url],
            browser_config: Typed {
                kind: "BrowserConfig",
                params: BrowserParams {
                    enable_stealth: false,
                    proxy_config: self.config.proxy.as_ref().map(|proxy| Typed {
                        kind: "ProxyConfig",
                        params: proxy,
                    }),
                },
            },
            crawler_config: Typed {
                kind: "CrawlerRunConfig",
                params: CrawlerParams {
                    cache_mode: "bypass",
                    magic: true,
                    simulate_user: true,
                    override_navigator: true,
                },
            },
        }
    }

    /// Crawl one page and return its converted content
    pub async fn crawl(&self, url: &str) -> Result<CrawlPage, CrawlError> {
        let target = validate_target_url(url)?;
        debug!("Crawling {} via {}", target, self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&self.request_body(target.as_str()))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CrawlError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CrawlResponse =
            serde_json::from_str(&body).map_err(|e| CrawlError::Parse(e.to_string()))?;

        let page = match parsed.results.into_iter().next() {
            Some(page) => page,
            None if !parsed.success => {
                return Err(CrawlError::Failed(
                    parsed.error.unwrap_or_else(|| "Unknown error".to_string()),
                ))
            }
            None => return Err(CrawlError::EmptyResult),
        };

        if !page.success {
            return Err(CrawlError::Failed(
                page.error_message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        debug!("Crawled {}", page.url);
        Ok(CrawlPage {
            url: page.url,
            markdown: page.markdown.map(MarkdownField::into_text).unwrap_or_default(),
            cleaned_html: page.cleaned_html.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn target_url_must_be_http() {
        assert!(validate_target_url("https://example.com/page").is_ok());
        assert!(matches!(
            validate_target_url("file:///etc/passwd"),
            Err(CrawlError::InvalidUrl { .. })
        ));
        assert!(matches!(
            validate_target_url("example.com"),
            Err(CrawlError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn request_body_carries_run_settings() {
        let config = CrawlConfig::default().with_proxy(ProxyConfig::from_parts(
            Some("http://proxy:3128".into()),
            Some("u".into()),
            Some("p".into()),
        ));
        let client = CrawlClient::new(config).unwrap();
        let body = serde_json::to_value(client.request_body("https://example.com")).unwrap();

        assert_eq!(body["urls"], json!(["https://example.com"]));
        assert_eq!(body["browser_config"]["type"], "BrowserConfig");
        assert_eq!(body["browser_config"]["params"]["enable_stealth"], false);
        assert_eq!(
            body["browser_config"]["params"]["proxy_config"]["params"],
            json!({"server": "http://proxy:3128", "username": "u", "password": "p"})
        );
        assert_eq!(
            body["crawler_config"]["params"],
            json!({
                "cache_mode": "bypass",
                "magic": true,
                "simulate_user": true,
                "override_navigator": true
            })
        );
    }

    #[test]
    fn no_proxy_key_without_proxy() {
        let client = CrawlClient::new(CrawlConfig::default()).unwrap();
        let body = serde_json::to_value(client.request_body("https://example.com")).unwrap();
        assert!(body["browser_config"]["params"].get("proxy_config").is_none());
        assert_eq!(client.endpoint().as_str(), "http://localhost:11235/crawl");
    }

    #[tokio::test]
    async fn accepts_markdown_object_and_string() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/crawl"))
            .and(body_partial_json(json!({"urls": ["https://a.example/"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "results": [{
                    "url": "https://a.example/",
                    "success": true,
                    "markdown": {"raw_markdown": "# A", "fit_markdown": ""},
                    "cleaned_html": "<h1>A</h1>"
                }]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/crawl"))
            .and(body_partial_json(json!({"urls": ["https://b.example/"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"url": "https://b.example/", "markdown": "# B"}]
            })))
            .mount(&mock_server)
            .await;

        let client = CrawlClient::new(CrawlConfig::new(mock_server.uri())).unwrap();

        let a = client.crawl("https://a.example/").await.unwrap();
        assert_eq!(a.markdown, "# A");
        assert_eq!(a.cleaned_html, "<h1>A</h1>");

        let b = client.crawl("https://b.example/").await.unwrap();
        assert_eq!(b.markdown, "# B");
        assert_eq!(b.cleaned_html, "");
    }

    #[tokio::test]
    async fn failed_page_surfaces_error_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/crawl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "results": [{"url": "https://x.example/", "success": false, "error_message": "net::ERR_NAME_NOT_RESOLVED"}]
            })))
            .mount(&mock_server)
            .await;

        let client = CrawlClient::new(CrawlConfig::new(mock_server.uri())).unwrap();
        let err = client.crawl("https://x.example/").await.unwrap_err();
        assert_eq!(err.to_string(), "net::ERR_NAME_NOT_RESOLVED");
    }

    #[tokio::test]
    async fn server_error_and_empty_results() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/crawl"))
            .and(body_partial_json(json!({"urls": ["https://down.example/"]})))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/crawl"))
            .and(body_partial_json(json!({"urls": ["https://empty.example/"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&mock_server)
            .await;

        let client = CrawlClient::new(CrawlConfig::new(mock_server.uri())).unwrap();

        let err = client.crawl("https://down.example/").await.unwrap_err();
        assert!(matches!(err, CrawlError::Status { status: 500, .. }));

        let err = client.crawl("https://empty.example/").await.unwrap_err();
        assert!(matches!(err, CrawlError::EmptyResult));
    }
}
