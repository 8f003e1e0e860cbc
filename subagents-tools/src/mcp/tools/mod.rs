//! Tool implementations
//!
//! There is one kind of tool: [`agent::AgentTool`], built from an agent
//! definition at registry build time.

pub mod agent;

pub use agent::{agent_tool_schema, AgentTool};
