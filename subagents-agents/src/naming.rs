//! Tool naming and agent name validation

use crate::{AgentError, Result};
use subagents_common::constants::TOOL_NAME_PREFIX;

/// Longest agent name accepted by [`validate_agent_name`]
const MAX_AGENT_NAME_LENGTH: usize = 255;

/// Characters with special meaning to a shell
const SHELL_METACHARACTERS: &[char] = &[
    ';', '&', '|', '`', '$', '<', '>', '(', ')', '{', '}', '[', ']', '!', '*', '?', '~', '"',
    '\'', '\\',
];

/// Map an agent name to its MCP tool name
///
/// Every character outside `[A-Za-z0-9_-]` becomes `_`, one for one, so the
/// result always has `agent_` plus exactly as many characters as the input.
///
/// ```
/// use subagents_agents::sanitize_tool_name;
///
/// assert_eq!(sanitize_tool_name("code-reviewer"), "agent_code-reviewer");
/// assert_eq!(sanitize_tool_name("my agent.v2"), "agent_my_agent_v2");
/// ```
pub fn sanitize_tool_name(agent_name: &str) -> String {
    let mut tool_name = String::with_capacity(TOOL_NAME_PREFIX.len() + agent_name.len());
    tool_name.push_str(TOOL_NAME_PREFIX);
    tool_name.extend(agent_name.chars().map(|c| {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            c
        } else {
            '_'
        }
    }));
    tool_name
}

/// Reject names that could traverse paths or inject shell syntax
pub fn validate_agent_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| {
        Err(AgentError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    };

    if name.trim().is_empty() {
        return invalid("name is required");
    }
    if name.chars().count() > MAX_AGENT_NAME_LENGTH {
        return invalid("name is too long");
    }
    if name.contains("..") || name.contains('/') {
        return invalid("name must not contain path separators or '..'");
    }
    if name.chars().any(|c| c.is_control()) {
        return invalid("name must not contain control characters");
    }
    if name.contains(SHELL_METACHARACTERS) {
        return invalid("name contains invalid characters");
    }
    Ok(())
}
