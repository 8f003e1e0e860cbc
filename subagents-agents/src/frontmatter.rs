//! Front-matter parsing for agent definition files
//!
//! The block is a restricted `key: value` format, not YAML. Only the keys in
//! [`AgentFrontmatter`] are recognised; anything else is ignored.
//!
//! # Format
//! ```markdown
//! ---
//! name: code-reviewer
//! description: "Reviews code for bugs"
//! tools: read, grep, glob
//! agentType: claude
//! ---
//! You are a meticulous code reviewer...
//! ```

use subagents_config::AgentType;

/// Metadata recognised in a front-matter block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentFrontmatter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tools: Option<Vec<String>>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub auto_approval_mode: Option<bool>,
    /// Absent when the key is missing or names an unknown engine
    pub agent_type: Option<AgentType>,
}

/// Represents parsed front-matter and the remaining body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterResult {
    /// Parsed metadata (None if the file has no front-matter block)
    pub metadata: Option<AgentFrontmatter>,
    /// Content after front-matter removal
    pub content: String,
}

/// Split a leading front-matter block from `content`
///
/// The block must open on the very first line with exactly `---` and close
/// with another `---` line. When either delimiter is missing the whole input
/// is returned as content with no metadata.
pub fn parse_frontmatter(content: &str) -> FrontmatterResult {
    let no_frontmatter = || FrontmatterResult {
        metadata: None,
        content: content.to_string(),
    };

    let Some(after_opening) = strip_opening_delimiter(content) else {
        return no_frontmatter();
    };

    match find_closing_delimiter(after_opening) {
        Some((block_end, body_start)) => FrontmatterResult {
            metadata: Some(parse_block(&after_opening[..block_end])),
            content: after_opening[body_start..].to_string(),
        },
        None => no_frontmatter(),
    }
}

fn strip_opening_delimiter(content: &str) -> Option<&str> {
    content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
}

/// Find the closing `---` line; returns (end of block, start of body)
fn find_closing_delimiter(text: &str) -> Option<(usize, usize)> {
    let mut line_start = 0;
    for line in text.split_inclusive('\n') {
        let bare = line.trim_end_matches('\n').trim_end_matches('\r');
        if bare == "---" {
            return Some((line_start, line_start + line.len()));
        }
        line_start += line.len();
    }
    None
}

fn parse_block(block: &str) -> AgentFrontmatter {
    let mut metadata = AgentFrontmatter::default();

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = strip_quotes(value.trim());

        match key.trim() {
            "name" => metadata.name = non_empty(value),
            "description" => metadata.description = non_empty(value),
            "model" => metadata.model = non_empty(value),
            "color" => metadata.color = non_empty(value),
            "tools" => {
                let tools: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|tool| !tool.is_empty())
                    .map(String::from)
                    .collect();
                metadata.tools = (!tools.is_empty()).then_some(tools);
            }
            "autoApprovalMode" => metadata.auto_approval_mode = parse_bool(value),
            "agentType" => {
                metadata.agent_type = value.parse::<AgentType>().ok();
                if metadata.agent_type.is_none() {
                    tracing::debug!("Ignoring unknown agentType '{}'", value);
                }
            }
            _ => {}
        }
    }

    metadata
}

/// Strip one matching pair of surrounding single or double quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
