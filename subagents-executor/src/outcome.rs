//! Execution outcome and its classification

use serde::Serialize;
use subagents_common::constants::{NO_OUTPUT_PLACEHOLDER, SIGTERM_EXIT_CODE, TIMEOUT_EXIT_CODE};

/// Client-visible result category of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    /// Clean exit, or SIGTERM after usable output was produced
    Success,
    /// Timed out after producing some output
    Partial,
    /// Anything else
    Error,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Success => "success",
            ExecutionStatus::Partial => "partial",
            ExecutionStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a finished or terminated run
///
/// ```
/// use subagents_executor::{classify, ExecutionStatus};
///
/// assert_eq!(classify(0, false), ExecutionStatus::Success);
/// assert_eq!(classify(143, true), ExecutionStatus::Success);
/// assert_eq!(classify(124, true), ExecutionStatus::Partial);
/// assert_eq!(classify(1, false), ExecutionStatus::Error);
/// ```
pub fn classify(exit_code: i32, has_result: bool) -> ExecutionStatus {
    match (exit_code, has_result) {
        (0, _) => ExecutionStatus::Success,
        (SIGTERM_EXIT_CODE, true) => ExecutionStatus::Success,
        (TIMEOUT_EXIT_CODE, true) => ExecutionStatus::Partial,
        _ => ExecutionStatus::Error,
    }
}

/// Captured result of one engine run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    /// Wall-clock milliseconds
    pub execution_time_ms: u64,
    /// Whether stdout holds anything besides whitespace
    pub has_result: bool,
}

impl ExecutionOutcome {
    pub fn new(stdout: String, stderr: String, exit_code: i32, execution_time_ms: u64) -> Self {
        let has_result = !stdout.trim().is_empty();
        Self {
            stdout,
            stderr,
            exit_code,
            execution_time_ms,
            has_result,
        }
    }

    pub fn status(&self) -> ExecutionStatus {
        classify(self.exit_code, self.has_result)
    }

    pub fn is_error(&self) -> bool {
        self.status() == ExecutionStatus::Error
    }

    /// Whether the run ended because the timeout fired
    pub fn timed_out(&self) -> bool {
        self.exit_code == TIMEOUT_EXIT_CODE
    }

    /// Text returned to the caller: stdout, else stderr, else a placeholder
    pub fn primary_text(&self) -> &str {
        if !self.stdout.trim().is_empty() {
            &self.stdout
        } else if !self.stderr.trim().is_empty() {
            &self.stderr
        } else {
            NO_OUTPUT_PLACEHOLDER
        }
    }
}
