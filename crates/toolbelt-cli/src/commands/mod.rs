// Command handlers for the toolbelt CLI

pub mod crawl;
pub mod search;
pub mod skills;

pub use crawl::CrawlCommand;
pub use search::SearchCommand;
pub use skills::SkillsCommand;

use crate::error::CliResult;
use clap::Args;
use toolbelt_mcp::transport::{DEFAULT_HOST, DEFAULT_PORT};
use toolbelt_mcp::{parse_port, Transport, TransportKind};

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<()>;
}

/// Transport flags shared by every server subcommand
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Transport: stdio, http, streamable-http or sse
    #[arg(long = "transport", env = "MCP_TYPE", default_value = "stdio")]
    pub transport: String,

    /// Bind address for HTTP transports
    #[arg(long, env = "MCP_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port for HTTP transports (0-65535)
    #[arg(long, env = "MCP_PORT")]
    pub port: Option<String>,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            transport: "stdio".to_string(),
            host: DEFAULT_HOST.to_string(),
            port: None,
        }
    }
}

impl ServeArgs {
    /// Resolve the transport, using `default_port` when no port was given
    pub fn transport(&self, default_port: u16) -> CliResult<Transport> {
        let port = match &self.port {
            Some(value) => parse_port(value)?,
            None => default_port,
        };
        Ok(Transport::new(
            TransportKind::parse(&self.transport),
            self.host.clone(),
            port,
        ))
    }

    pub fn default_transport(&self) -> CliResult<Transport> {
        self.transport(DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn port_defaults_per_server() {
        let args = ServeArgs {
            transport: "http".to_string(),
            ..ServeArgs::default()
        };
        assert_eq!(
            args.transport(8000).unwrap(),
            Transport::Http {
                host: "127.0.0.1".to_string(),
                port: 8000
            }
        );
        assert_eq!(
            args.default_transport().unwrap(),
            Transport::Http {
                host: "127.0.0.1".to_string(),
                port: 8001
            }
        );
    }

    #[test]
    fn invalid_port_is_rejected_even_for_stdio() {
        let args = ServeArgs {
            port: Some("70000".to_string()),
            ..ServeArgs::default()
        };
        let err = args.default_transport().unwrap_err();
        assert!(matches!(err, CliError::Serve(_)));
        assert!(err.to_string().contains("Invalid port number: 70000"));
    }
}
