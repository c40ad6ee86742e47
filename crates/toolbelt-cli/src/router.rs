// Command routing and dispatch

use crate::commands::*;
use crate::error::CliResult;
use clap::{Parser, Subcommand};
use toolbelt_crawl::{CrawlConfig, ProxyConfig, DEFAULT_CRAWL4AI_URL};
use toolbelt_search::{SearxngConfig, DEFAULT_SEARXNG_URL};
use toolbelt_skills::paths::{DEFAULT_GLOBAL_SKILLS_PATH, DEFAULT_PROJECT_SKILLS_PATH};

/// toolbelt - MCP server adapters for skills, web search and page crawling
#[derive(Parser, Debug)]
#[command(name = "toolbelt")]
#[command(bin_name = "toolbelt")]
#[command(about = "MCP server adapters for skills, SearXNG search and crawl4ai")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "TOOLBELT_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Serve SKILL.md skills as a single MCP tool
    Skills {
        #[command(flatten)]
        serve: ServeArgs,

        /// Comma-separated project skill directories
        #[arg(long, env = "PROJECT_SKILLS_PATH", default_value = DEFAULT_PROJECT_SKILLS_PATH)]
        project_skills_path: String,

        /// Comma-separated global skill directories
        #[arg(long, env = "GLOBAL_SKILLS_PATH", default_value = DEFAULT_GLOBAL_SKILLS_PATH)]
        global_skills_path: String,

        /// Prefix prepended to the advertised tool name
        #[arg(long, env = "SKILLS_TOOL_PREFIX", default_value = "")]
        tool_prefix: String,

        /// Print discovered skills and exit
        #[arg(long)]
        list: bool,
    },

    /// Serve web search backed by SearXNG
    Search {
        #[command(flatten)]
        serve: ServeArgs,

        /// SearXNG base URL
        #[arg(long, env = "SEARXNG_URL", default_value = DEFAULT_SEARXNG_URL)]
        searxng_url: String,

        /// Basic auth user for SearXNG
        #[arg(long, env = "SEARXNG_USER")]
        auth_user: Option<String>,

        /// Basic auth password for SearXNG
        #[arg(long, env = "SEARXNG_PASSWORD", hide_env_values = true)]
        auth_password: Option<String>,

        /// Request timeout in seconds
        #[arg(long, env = "SEARXNG_TIMEOUT", default_value_t = toolbelt_search::config::DEFAULT_TIMEOUT_SECS)]
        timeout: u64,
    },

    /// Serve web page conversion backed by crawl4ai
    Crawl {
        #[command(flatten)]
        serve: ServeArgs,

        /// crawl4ai service base URL
        #[arg(long, env = "CRAWL4AI_URL", default_value = DEFAULT_CRAWL4AI_URL)]
        crawl4ai_url: String,

        /// Proxy server for the crawler's browser
        #[arg(long, env = "CRAWL4AI_PROXY_SERVER")]
        proxy_server: Option<String>,

        #[arg(long, env = "CRAWL4AI_PROXY_USERNAME")]
        proxy_username: Option<String>,

        #[arg(long, env = "CRAWL4AI_PROXY_PASSWORD", hide_env_values = true)]
        proxy_password: Option<String>,

        /// Request timeout in seconds
        #[arg(long, env = "CRAWL4AI_TIMEOUT", default_value_t = toolbelt_crawl::config::DEFAULT_TIMEOUT_SECS)]
        timeout: u64,
    },
}

/// Route and execute commands
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();

        crate::logging::init_logging(&cli.log_level);

        Self::execute(&cli).await
    }

    /// Execute a command
    pub async fn execute(cli: &Cli) -> CliResult<()> {
        Self::build(&cli.command).execute().await
    }

    /// Build the handler for a parsed command
    pub fn build(command: &Commands) -> Box<dyn Command> {
        match command {
            Commands::Skills {
                serve,
                project_skills_path,
                global_skills_path,
                tool_prefix,
                list,
            } => Box::new(
                SkillsCommand::new(
                    project_skills_path.clone(),
                    global_skills_path.clone(),
                    serve.clone(),
                )
                .with_tool_prefix(tool_prefix.clone())
                .with_list(*list),
            ),
            Commands::Search {
                serve,
                searxng_url,
                auth_user,
                auth_password,
                timeout,
            } => {
                let config = SearxngConfig {
                    url: searxng_url.clone(),
                    auth_user: auth_user.clone(),
                    auth_password: auth_password.clone(),
                    timeout_secs: *timeout,
                };
                Box::new(SearchCommand::new(config, serve.clone()))
            }
            Commands::Crawl {
                serve,
                crawl4ai_url,
                proxy_server,
                proxy_username,
                proxy_password,
                timeout,
            } => {
                let proxy = ProxyConfig::from_parts(
                    proxy_server.clone(),
                    proxy_username.clone(),
                    proxy_password.clone(),
                );
                let config = CrawlConfig {
                    url: crawl4ai_url.clone(),
                    proxy,
                    timeout_secs: *timeout,
                };
                Box::new(CrawlCommand::new(config, serve.clone()))
            }
        }
    }
}
