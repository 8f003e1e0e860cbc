//! Execution engine selection
//!
//! An [`AgentType`] names the external CLI that runs an agent. The server has
//! one default; an agent definition may override it with `agentType`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// External command-line engine used to execute an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    /// The `cursor-agent` CLI (server default)
    #[default]
    Cursor,
    /// The `claude` CLI
    Claude,
    /// The `gemini` CLI
    Gemini,
}

impl AgentType {
    /// All engines in a stable order
    pub const ALL: [AgentType; 3] = [AgentType::Cursor, AgentType::Claude, AgentType::Gemini];

    /// Lowercase identifier used in configuration and front-matter
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentType::Cursor => "cursor",
            AgentType::Claude => "claude",
            AgentType::Gemini => "gemini",
        }
    }
}

impl std::fmt::Display for AgentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cursor" => Ok(AgentType::Cursor),
            "claude" => Ok(AgentType::Claude),
            "gemini" => Ok(AgentType::Gemini),
            other => Err(format!(
                "unknown agent type '{}', expected one of: cursor, claude, gemini",
                other
            )),
        }
    }
}
