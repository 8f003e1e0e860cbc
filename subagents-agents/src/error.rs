//! Error types for the agents crate

use std::path::PathBuf;
use subagents_common::{ErrorSeverity, Severity};
use thiserror::Error;

/// Errors that can occur while discovering or looking up agents
#[derive(Debug, Error)]
pub enum AgentError {
    /// The agents directory could not be listed
    #[error("failed to read agents directory '{}': {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single definition file could not be read
    #[error("failed to read agent file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An agent name failed syntactic validation
    #[error("invalid agent name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

impl Severity for AgentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            AgentError::DirectoryRead { .. } => ErrorSeverity::Critical,
            AgentError::FileRead { .. } => ErrorSeverity::Warning,
            AgentError::InvalidName { .. } => ErrorSeverity::Error,
        }
    }
}

pub type Result<T> = std::result::Result<T, AgentError>;
