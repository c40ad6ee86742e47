//! crawl4ai service and browser settings

use serde::{Deserialize, Serialize};

pub const DEFAULT_CRAWL4AI_URL: &str = "http://localhost:11235";

/// Page loads behind stealth browsing can be slow
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Upstream proxy the crawler's browser should use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub server: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Build from optional parts. No server means no proxy; credentials are
    /// only kept when both username and password are present.
    pub fn from_parts(
        server: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Option<Self> {
        let server = server.filter(|s| !s.trim().is_empty())?;
        let (username, password) = match (username, password) {
            (Some(user), Some(pass)) => (Some(user), Some(pass)),
            _ => (None, None),
        };
        Some(Self {
            server,
            username,
            password,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Base URL of the crawl4ai REST service
    pub url: String,
    #[serde(default)]
    pub proxy: Option<ProxyConfig>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CRAWL4AI_URL.to_string(),
            proxy: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CrawlConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_proxy(mut self, proxy: Option<ProxyConfig>) -> Self {
        self.proxy = proxy;
        self
    }
}
