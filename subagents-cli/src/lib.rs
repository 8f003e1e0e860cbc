//! Subagents MCP command-line interface
//!
//! Commands:
//! - `subagents-mcp [serve]`: serve every agent as an MCP tool over stdio
//! - `subagents-mcp list [--format json]`: print discovered agents
//!
//! Exit codes:
//! - 0: Success
//! - 1: Warning (e.g. no agents found)
//! - 2: Error

pub mod cli;
pub mod exit_codes;
pub mod list;
pub mod logging;
pub mod serve;

pub use cli::{Cli, Commands, OutputFormat};

use exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use subagents_common::Severity;
use subagents_config::{ConfigError, ConfigProvider};

/// Load configuration, set up logging and run the selected command
///
/// Returns the process exit code.
pub async fn run(cli: Cli) -> i32 {
    let mut provider = ConfigProvider::new().with_overrides(cli.overrides());
    if let Some(path) = &cli.config {
        provider = provider.with_config_file(path);
    }

    let config = match provider.load() {
        Ok(config) => config,
        Err(e) => {
            report_config_error(&e);
            return EXIT_ERROR;
        }
    };

    logging::configure_logging(&config.log_level, config.log_file.as_deref());

    let result = match cli.command() {
        Commands::Serve => serve::run_serve(config).await.map(|()| EXIT_SUCCESS),
        Commands::List { format } => list::run_list(&config, format).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    }
}

fn report_config_error(error: &ConfigError) {
    // Logging is not configured yet
    eprintln!("Configuration error ({}): {}", error.severity(), error);
}
