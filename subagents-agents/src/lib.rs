//! Subagents Agents
//!
//! Turns a directory of markdown or plain-text files into [`AgentDefinition`]s.
//!
//! ## Overview
//!
//! Each `.md` or `.txt` file is one agent. An optional `---` delimited block
//! of `key: value` lines at the top carries metadata; the rest of the file is
//! the system prompt handed to the execution engine.
//!
//! Nothing is cached. [`AgentLoader::list_agents`] reads the directory again
//! on every call.

pub mod agent;
pub mod agent_loader;
pub mod error;
pub mod frontmatter;
pub mod naming;

// Re-export key types
pub use agent::AgentDefinition;
pub use agent_loader::AgentLoader;
pub use error::{AgentError, Result};
pub use frontmatter::{parse_frontmatter, AgentFrontmatter, FrontmatterResult};
pub use naming::{sanitize_tool_name, validate_agent_name};
pub use subagents_config::AgentType;
