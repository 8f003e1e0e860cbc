//! Response creation utilities for agent tool calls
//!
//! The primary text of a response is only ever the engine output or an error
//! message. Everything else travels in `structured_content`.

use crate::mcp::statistics::ToolStatisticsSnapshot;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::{json, Value};
use subagents_config::AgentType;
use subagents_executor::{ExecutionOutcome, ExecutionStatus};

/// Why a known tool could not produce an execution outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Call arguments were rejected
    Validation,
    /// The agent behind the tool no longer exists
    AgentNotFound,
    /// The agents directory could not be read
    Discovery,
    /// The engine could not be started
    Spawn,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::AgentNotFound => "agent_not_found",
            ErrorKind::Discovery => "discovery",
            ErrorKind::Spawn => "spawn",
        }
    }
}

/// What ran, and how it went
#[derive(Debug)]
pub struct ExecutionReport<'a> {
    pub agent: &'a str,
    pub tool_name: &'a str,
    pub agent_type: AgentType,
    pub model: Option<&'a str>,
    pub outcome: &'a ExecutionOutcome,
    pub statistics: ToolStatisticsSnapshot,
}

/// Response for a finished or timed-out engine run
///
/// `is_error` is set only for [`ExecutionStatus::Error`]; partial output
/// after a timeout is returned as a normal result.
pub fn create_execution_response(report: ExecutionReport<'_>) -> CallToolResult {
    let outcome = report.outcome;
    let status = outcome.status();

    let mut structured = json!({
        "status": status,
        "exitCode": outcome.exit_code,
        "executionTime": outcome.execution_time_ms,
        "hasResult": outcome.has_result,
        "agent": report.agent,
        "toolName": report.tool_name,
        "agentType": report.agent_type,
        "model": report.model,
        "statistics": report.statistics,
    });
    let stdout_is_primary = !outcome.stdout.trim().is_empty();
    if stdout_is_primary && !outcome.stderr.trim().is_empty() {
        structured["stderr"] = Value::String(outcome.stderr.clone());
    }

    let content = vec![Content::text(outcome.primary_text())];
    let mut result = match status {
        ExecutionStatus::Error => CallToolResult::error(content),
        ExecutionStatus::Success | ExecutionStatus::Partial => CallToolResult::success(content),
    };
    result.structured_content = Some(structured);
    result
}

/// Error response for a known tool that could not run
pub fn create_error_response(kind: ErrorKind, tool_name: &str, message: String) -> CallToolResult {
    let structured = json!({
        "status": ExecutionStatus::Error,
        "errorKind": kind,
        "toolName": tool_name,
        "message": message,
    });
    let mut result = CallToolResult::error(vec![Content::text(message)]);
    result.structured_content = Some(structured);
    result
}
