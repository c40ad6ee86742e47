//! Server startup and transport errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServeError {
    /// MCP_PORT did not parse as a port number
    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// rmcp failed to initialize or run the session
    #[error("MCP transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
