// Tracing setup
//
// Logs go to stderr: stdout carries the MCP stdio transport.

use tracing::Level;

/// Map a level name to a tracing level, defaulting to INFO
pub fn parse_level(value: &str) -> Level {
    match value.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global fmt subscriber
pub fn init_logging(log_level: &str) {
    let level = parse_level(log_level);
    let verbose = level >= Level::DEBUG;

    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(verbose)
        .with_file(verbose)
        .with_line_number(verbose)
        .with_writer(std::io::stderr)
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
