//! Model Context Protocol (MCP) server support
//!
//! - [`McpServer`] answers list-tools, call-tool, list-resources and
//!   read-resource requests
//! - [`ToolRegistry`] maps sanitized tool names to agent tools and reports
//!   name collisions
//! - [`validation`] checks call arguments before anything is executed

pub mod resources;
pub mod responses;
pub mod server;
pub mod statistics;
pub mod stdio_server;
pub mod tool_registry;
pub mod tools;
pub mod validation;

pub use server::McpServer;
pub use statistics::{ToolStatistics, ToolStatisticsSnapshot};
pub use stdio_server::serve_stdio;
pub use tool_registry::{register_agent_tools, McpTool, ToolContext, ToolRegistry};
pub use validation::{validate_params, ValidatedParams, ValidationError};
