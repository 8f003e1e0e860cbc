//! Agent execution through external command-line engines
//!
//! An [`AgentExecutor`] turns an [`ExecutionRequest`] into one subprocess of
//! the `cursor-agent`, `claude` or `gemini` CLI, enforces the wall-clock
//! timeout and reports an [`ExecutionOutcome`]. The outcome's
//! [`ExecutionStatus`] decides whether the caller sees an error.

pub mod engines;
pub mod error;
pub mod executor;
pub mod outcome;
pub mod process;
pub mod request;

// Re-export commonly used types
pub use engines::{ClaudeExecutor, CursorExecutor, GeminiExecutor};
pub use error::{ExecutorError, ExecutorResult};
pub use executor::{resolve_program, AgentExecutor, ExecutorFactory};
pub use outcome::{classify, ExecutionOutcome, ExecutionStatus};
pub use process::{run_with_timeout, ProcessGuard};
pub use request::{compose_instruction, ExecutionRequest};
