//! `list` - show discovered agents and the tools they become

use crate::cli::OutputFormat;
use crate::exit_codes::{EXIT_SUCCESS, EXIT_WARNING};
use anyhow::Context;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use std::path::PathBuf;
use subagents_agents::{AgentDefinition, AgentLoader};
use subagents_config::{AgentType, ServerConfig};

/// Maximum length for description in table display before truncation.
const MAX_DESCRIPTION_LENGTH: usize = 50;

/// One agent as printed by `list --format json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSummary {
    pub name: String,
    pub tool_name: String,
    /// Engine the agent runs on, after applying the server default
    pub agent_type: AgentType,
    pub model: Option<String>,
    pub description: String,
    pub file_path: PathBuf,
}

impl AgentSummary {
    pub fn new(agent: &AgentDefinition, default_type: AgentType) -> Self {
        Self {
            name: agent.name.clone(),
            tool_name: agent.tool_name(),
            agent_type: agent.effective_agent_type(default_type),
            model: agent.model.clone(),
            description: agent.description.clone(),
            file_path: agent.file_path.clone(),
        }
    }
}

/// Run the list command
///
/// Returns [`EXIT_WARNING`] when the directory holds no agents.
pub async fn run_list(config: &ServerConfig, format: OutputFormat) -> anyhow::Result<i32> {
    let agents_dir = config.agents_dir()?;
    let agents = AgentLoader::new(agents_dir)
        .list_agents()
        .await
        .with_context(|| format!("listing agents in {}", agents_dir.display()))?;

    let mut summaries: Vec<AgentSummary> = agents
        .iter()
        .map(|agent| AgentSummary::new(agent, config.agent_type))
        .collect();
    summaries.sort_by(|a, b| a.tool_name.cmp(&b.tool_name));

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Table if summaries.is_empty() => {
            println!("No agents found in {}", agents_dir.display());
        }
        OutputFormat::Table => {
            println!("{}", render_table(&summaries));
            println!();
            println!("{} agent(s) found", summaries.len());
        }
    }

    Ok(if summaries.is_empty() {
        EXIT_WARNING
    } else {
        EXIT_SUCCESS
    })
}

/// Table of agents with one row each
pub fn render_table(summaries: &[AgentSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Tool", "Type", "Model", "Description"]);

    for summary in summaries {
        table.add_row(vec![
            summary.name.clone(),
            summary.tool_name.clone(),
            summary.agent_type.to_string(),
            summary.model.clone().unwrap_or_else(|| "-".to_string()),
            truncate_description(&summary.description, MAX_DESCRIPTION_LENGTH),
        ]);
    }
    table
}

/// Truncate description to `max_len` characters with an ellipsis
fn truncate_description(description: &str, max_len: usize) -> String {
    if description.chars().count() <= max_len {
        description.to_string()
    } else {
        let kept: String = description.chars().take(max_len - 3).collect();
        format!("{kept}...")
    }
}
