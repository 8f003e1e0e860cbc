//! # Subagents Tools
//!
//! MCP server that publishes every agent definition in a directory as its own
//! tool, plus an `agents://list` resource describing them all.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use subagents_config::ServerConfig;
//! use subagents_tools::McpServer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let server = McpServer::new(ServerConfig::for_agents_dir("./agents"))?;
//! for tool in server.list_tools().await {
//!     println!("{}", tool.name);
//! }
//! # Ok(())
//! # }
//! ```

/// Model Context Protocol (MCP) server and tools
pub mod mcp;

pub use mcp::{McpServer, ToolContext, ToolRegistry};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
