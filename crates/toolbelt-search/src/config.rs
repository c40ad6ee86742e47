//! SearXNG connection settings

use serde::{Deserialize, Serialize};

pub const DEFAULT_SEARXNG_URL: &str = "http://localhost:8080";

/// Per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Result count used when the caller does not pass a limit
pub const DEFAULT_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearxngConfig {
    /// Base URL of the SearXNG instance
    pub url: String,
    #[serde(default)]
    pub auth_user: Option<String>,
    #[serde(default)]
    pub auth_password: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SearxngConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SEARXNG_URL.to_string(),
            auth_user: None,
            auth_password: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SearxngConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Basic auth is only sent when both halves are present
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.auth_user, &self.auth_password) {
            (Some(user), Some(password)) => Some((user.as_str(), password.as_str())),
            _ => None,
        }
    }
}
