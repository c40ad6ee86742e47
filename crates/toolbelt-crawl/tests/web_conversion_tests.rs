//! web_to_md / web_to_html against a mock crawl4ai server

use serde_json::json;
use toolbelt_crawl::{web_to_html, web_to_md, CrawlClient, CrawlConfig, ProxyConfig};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_crawl4ai() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crawl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "results": [{
                "url": "https://docs.example/",
                "success": true,
                "markdown": {"raw_markdown": "# Docs\n\nWelcome."},
                "cleaned_html": "<h1>Docs</h1><p>Welcome.</p>"
            }]
        })))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn markdown_and_html_views_of_one_page() {
    let server = mock_crawl4ai().await;
    let client = CrawlClient::new(CrawlConfig::new(server.uri())).unwrap();

    assert_eq!(
        web_to_md(&client, "https://docs.example/").await,
        "# Docs\n\nWelcome."
    );
    assert_eq!(
        web_to_html(&client, "https://docs.example/").await,
        "<h1>Docs</h1><p>Welcome.</p>"
    );
}

#[tokio::test]
async fn invalid_url_is_reported_as_text() {
    let server = mock_crawl4ai().await;
    let client = CrawlClient::new(CrawlConfig::new(server.uri())).unwrap();

    let text = web_to_md(&client, "mailto:someone@example.com").await;
    assert!(text.starts_with("Crawl web failed: Invalid URL 'mailto:someone@example.com'"));
}

#[tokio::test]
async fn unreachable_service_is_reported_as_text() {
    let client = CrawlClient::new(CrawlConfig::new("http://127.0.0.1:9")).unwrap();
    let text = web_to_html(&client, "https://docs.example/").await;
    assert!(text.starts_with("Crawl web failed: HTTP request failed"));
}

#[tokio::test]
async fn proxy_settings_reach_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crawl"))
        .and(body_partial_json(json!({
            "browser_config": {"params": {"proxy_config": {"params": {"server": "http://proxy:3128"}}}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"url": "https://docs.example/", "markdown": "ok"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = CrawlConfig::new(server.uri()).with_proxy(ProxyConfig::from_parts(
        Some("http://proxy:3128".to_string()),
        None,
        None,
    ));
    let client = CrawlClient::new(config).unwrap();
    assert_eq!(web_to_md(&client, "https://docs.example/").await, "ok");
}
