//! Core agent types

use crate::frontmatter::parse_frontmatter;
use crate::naming::sanitize_tool_name;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use subagents_common::constants::FALLBACK_DESCRIPTION;
use subagents_config::AgentType;

/// A parsed agent definition
///
/// Rebuilt on every directory scan; its only identity is the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDefinition {
    /// Front-matter `name`, else the file name without extension
    pub name: String,
    /// Human-readable summary
    pub description: String,
    /// Body with front-matter removed; the engine's system prompt
    pub content: String,
    /// Absolute path of the source file
    pub file_path: PathBuf,
    /// Modification time of the source file
    pub last_modified: DateTime<Utc>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub tools: Option<Vec<String>>,
    pub auto_approval_mode: Option<bool>,
    /// Engine override; None means the server default
    pub agent_type: Option<AgentType>,
}

impl AgentDefinition {
    /// Build a definition from raw file text
    ///
    /// `file_stem` is used as the name when front-matter does not supply one.
    pub fn parse(
        file_stem: &str,
        file_path: PathBuf,
        last_modified: DateTime<Utc>,
        text: &str,
    ) -> Self {
        let parsed = parse_frontmatter(text);
        let metadata = parsed.metadata.unwrap_or_default();
        let content = parsed.content.trim().to_string();

        let description = metadata
            .description
            .unwrap_or_else(|| describe_from_body(&content));

        Self {
            name: metadata.name.unwrap_or_else(|| file_stem.to_string()),
            description,
            content,
            file_path,
            last_modified,
            model: metadata.model,
            color: metadata.color,
            tools: metadata.tools,
            auto_approval_mode: metadata.auto_approval_mode,
            agent_type: metadata.agent_type,
        }
    }

    /// MCP tool name for this agent
    pub fn tool_name(&self) -> String {
        sanitize_tool_name(&self.name)
    }

    /// Engine that runs this agent given the server default
    pub fn effective_agent_type(&self, default: AgentType) -> AgentType {
        self.agent_type.unwrap_or(default)
    }
}

/// First markdown heading, else first non-empty line, else a fixed fallback
fn describe_from_body(content: &str) -> String {
    let heading = content.lines().find_map(|line| {
        let line = line.trim();
        let title = line.strip_prefix('#')?.trim_start_matches('#');
        // "#tag" is not a heading
        if !title.starts_with(char::is_whitespace) {
            return None;
        }
        let title = title.trim();
        (!title.is_empty()).then(|| title.to_string())
    });

    heading
        .or_else(|| {
            content
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string())
}
