//! Server configuration values

use crate::{AgentType, ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use subagents_common::constants::{DEFAULT_EXECUTION_TIMEOUT_MS, MAX_EXECUTION_TIMEOUT_MS};

/// Log levels accepted by `log_level`
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Effective configuration of a running server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Directory scanned for agent definition files
    #[serde(deserialize_with = "crate::lenient::optional_path")]
    pub agents_dir: Option<PathBuf>,
    /// Engine used when an agent does not name one
    pub agent_type: AgentType,
    /// Logging verbosity
    #[serde(deserialize_with = "crate::lenient::string")]
    pub log_level: String,
    /// Write logs to this file instead of stderr
    #[serde(deserialize_with = "crate::lenient::optional_path")]
    pub log_file: Option<PathBuf>,
    /// Wall-clock limit for one agent run
    pub execution_timeout_ms: u64,
    /// Name reported to MCP clients
    #[serde(deserialize_with = "crate::lenient::string")]
    pub server_name: String,
    /// Version reported to MCP clients
    #[serde(deserialize_with = "crate::lenient::string")]
    pub server_version: String,
    /// Executable for the cursor engine
    #[serde(deserialize_with = "crate::lenient::string")]
    pub cursor_path: String,
    /// Executable for the claude engine
    #[serde(deserialize_with = "crate::lenient::string")]
    pub claude_path: String,
    /// Executable for the gemini engine
    #[serde(deserialize_with = "crate::lenient::string")]
    pub gemini_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            agents_dir: None,
            agent_type: AgentType::default(),
            log_level: "info".to_string(),
            log_file: None,
            execution_timeout_ms: DEFAULT_EXECUTION_TIMEOUT_MS,
            server_name: "subagents-mcp".to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
            cursor_path: "cursor-agent".to_string(),
            claude_path: "claude".to_string(),
            gemini_path: "gemini".to_string(),
        }
    }
}

impl ServerConfig {
    /// Create a configuration rooted at `agents_dir` with every other value defaulted
    pub fn for_agents_dir(agents_dir: impl Into<PathBuf>) -> Self {
        Self {
            agents_dir: Some(agents_dir.into()),
            ..Self::default()
        }
    }

    /// The configured agents directory
    pub fn agents_dir(&self) -> ConfigResult<&Path> {
        match self.agents_dir.as_deref() {
            Some(dir) if !dir.as_os_str().is_empty() => Ok(dir),
            _ => Err(ConfigError::validation(
                "agents_dir is required (set SUBAGENTS_AGENTS_DIR or pass --agents-dir)",
            )),
        }
    }

    /// Execution timeout as a [`Duration`]
    pub fn execution_timeout(&self) -> Duration {
        Duration::from_millis(self.execution_timeout_ms)
    }

    /// Executable configured for `agent_type`
    pub fn executable_for(&self, agent_type: AgentType) -> &str {
        match agent_type {
            AgentType::Cursor => &self.cursor_path,
            AgentType::Claude => &self.claude_path,
            AgentType::Gemini => &self.gemini_path,
        }
    }

    /// Clamp the execution timeout to the administrative cap
    pub fn normalize(&mut self) {
        if self.execution_timeout_ms > MAX_EXECUTION_TIMEOUT_MS {
            tracing::warn!(
                "execution_timeout_ms {} exceeds the maximum of {}, clamping",
                self.execution_timeout_ms,
                MAX_EXECUTION_TIMEOUT_MS
            );
            self.execution_timeout_ms = MAX_EXECUTION_TIMEOUT_MS;
        }
    }

    /// Check the configuration for values the server cannot start with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server_name.trim().is_empty() {
            return Err(ConfigError::validation("server_name must not be empty"));
        }
        if self.server_version.trim().is_empty() {
            return Err(ConfigError::validation("server_version must not be empty"));
        }
        self.agents_dir()?;
        if self.execution_timeout_ms == 0 {
            return Err(ConfigError::validation(
                "execution_timeout_ms must be at least 1",
            ));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::validation(format!(
                "log_level '{}' is not one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        for agent_type in AgentType::ALL {
            if self.executable_for(agent_type).trim().is_empty() {
                return Err(ConfigError::validation(format!(
                    "{}_path must not be empty",
                    agent_type
                )));
            }
        }
        Ok(())
    }
}
