//! CLI definition for the subagents MCP bridge
//!
//! Only depends on `clap`, `std` and the config crate's [`AgentType`].

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use subagents_config::{AgentType, CliOverrides};

/// Output format of the `list` command
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// One JSON array of agents
    Json,
}

/// Subagents MCP - expose agent definition files as MCP tools
///
/// Every `.md` or `.txt` file in the agents directory becomes a tool named
/// `agent_<name>` that runs the agent through the cursor, claude or gemini CLI.
#[derive(Parser, Debug)]
#[command(name = "subagents-mcp")]
#[command(version)]
#[command(about = "Expose agent definition files as MCP tools")]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory containing agent definition files
    #[arg(long, global = true, value_name = "DIR")]
    pub agents_dir: Option<PathBuf>,

    /// Engine for agents that do not name one (cursor, claude, gemini)
    #[arg(long, global = true, value_parser = parse_agent_type)]
    pub agent_type: Option<AgentType>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Serve agents as MCP tools over stdio (default)
    Serve,
    /// List discovered agents and their tool names
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

impl Cli {
    /// The command to run; `serve` when none was given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }

    /// Flags that override file and environment configuration
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            agents_dir: self.agents_dir.clone(),
            agent_type: self.agent_type,
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

fn parse_agent_type(value: &str) -> Result<AgentType, String> {
    value.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_is_default() {
        let cli = Cli::try_parse_from(["subagents-mcp", "--agents-dir", "/agents"]).unwrap();
        assert_eq!(cli.command(), Commands::Serve);
        assert_eq!(cli.overrides().agents_dir, Some(PathBuf::from("/agents")));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "subagents-mcp",
            "list",
            "--format",
            "json",
            "--agent-type",
            "gemini",
        ])
        .unwrap();
        assert_eq!(
            cli.command(),
            Commands::List {
                format: OutputFormat::Json
            }
        );
        assert_eq!(cli.overrides().agent_type, Some(AgentType::Gemini));
    }

    #[test]
    fn test_rejects_unknown_agent_type() {
        assert!(Cli::try_parse_from(["subagents-mcp", "--agent-type", "copilot"]).is_err());
    }
}
