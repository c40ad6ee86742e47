//! MCP servers for the toolbelt adapters
//!
//! Each server wraps one adapter crate and can be served over stdio or
//! streamable HTTP via [`transport::serve`].

pub mod crawl;
pub mod error;
pub mod response;
pub mod search;
pub mod skills;
pub mod transport;

pub use crawl::CrawlServer;
pub use error::ServeError;
pub use search::SearchServer;
pub use skills::SkillsServer;
pub use transport::{parse_port, serve, Transport, TransportKind};
