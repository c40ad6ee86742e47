//! Transport selection and serving
//!
//! `stdio` speaks MCP over stdin/stdout. `http`, `streamable-http` and `sse`
//! all select the streamable HTTP transport mounted at `/mcp`.

use crate::error::ServeError;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, tower::StreamableHttpService,
};
use rmcp::transport::StreamableHttpServerConfig;
use rmcp::{ServerHandler, ServiceExt};
use std::fmt;
use tracing::{info, warn};

pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port for the skills and search servers
pub const DEFAULT_PORT: u16 = 8001;

/// Default port for the crawl server
pub const DEFAULT_CRAWL_PORT: u16 = 8000;

/// Path the HTTP transport is mounted under
pub const HTTP_MOUNT_PATH: &str = "/mcp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Stdio,
    Http,
}

impl TransportKind {
    /// Case-insensitive; unrecognized values fall back to stdio
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "stdio" | "" => Self::Stdio,
            "http" | "streamable-http" | "sse" => Self::Http,
            other => {
                warn!("Unknown MCP transport '{}', using stdio", other);
                Self::Stdio
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    Stdio,
    Http { host: String, port: u16 },
}

impl Transport {
    pub fn new(kind: TransportKind, host: impl Into<String>, port: u16) -> Self {
        match kind {
            TransportKind::Stdio => Self::Stdio,
            TransportKind::Http => Self::Http {
                host: host.into(),
                port,
            },
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => f.write_str("stdio"),
            Self::Http { host, port } => write!(f, "http://{}:{}{}", host, port, HTTP_MOUNT_PATH),
        }
    }
}

/// Parse a port in `0..=65535`
pub fn parse_port(value: &str) -> Result<u16, ServeError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|_| ServeError::InvalidPort(value.to_string()))
}

/// Serve `server` until the client disconnects or ctrl-c
pub async fn serve<S>(server: S, transport: Transport) -> Result<(), ServeError>
where
    S: ServerHandler + Clone + Send + Sync + 'static,
{
    info!("Starting MCP server on {}", transport);
    match transport {
        Transport::Stdio => serve_stdio(server).await,
        Transport::Http { host, port } => serve_http(server, &host, port).await,
    }
}

async fn serve_stdio<S>(server: S) -> Result<(), ServeError>
where
    S: ServerHandler + Send + Sync + 'static,
{
    let service = server
        .serve((tokio::io::stdin(), tokio::io::stdout()))
        .await
        .map_err(|e| ServeError::Transport(e.to_string()))?;

    let reason = service
        .waiting()
        .await
        .map_err(|e| ServeError::Transport(e.to_string()))?;
    info!("MCP stdio session ended: {:?}", reason);
    Ok(())
}

async fn serve_http<S>(server: S, host: &str, port: u16) -> Result<(), ServeError>
where
    S: ServerHandler + Clone + Send + Sync + 'static,
{
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    let router = axum::Router::new().nest_service(HTTP_MOUNT_PATH, service);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("Listening on http://{}{}", addr, HTTP_MOUNT_PATH);
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    info!("HTTP server shut down");
    Ok(())
}
