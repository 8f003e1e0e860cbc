//! Error types for agent execution
//!
//! Only failures that prevent a subprocess from running at all are errors.
//! A process that runs and exits badly is an [`ExecutionOutcome`] with an
//! error status, not an [`ExecutorError`].
//!
//! [`ExecutionOutcome`]: crate::ExecutionOutcome

use subagents_common::{ErrorSeverity, Severity};
use thiserror::Error;

/// Errors that can occur before or while supervising an engine process
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// The engine executable could not be found
    #[error("executable '{program}' not found; install it or set its path in the configuration")]
    ExecutableNotFound { program: String },

    /// The engine process could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the engine process failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Severity for ExecutorError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecutorError::ExecutableNotFound { .. } => ErrorSeverity::Critical,
            ExecutorError::Spawn { .. } | ExecutorError::Io(_) => ErrorSeverity::Error,
        }
    }
}

/// Result type for executor operations
pub type ExecutorResult<T> = std::result::Result<T, ExecutorError>;
