//! The `agents://list` discovery resource

use rmcp::model::{AnnotateAble, RawResource, Resource};
use std::fmt::Write;
use subagents_agents::AgentDefinition;
use subagents_common::constants::AGENTS_RESOURCE_URI;

/// Descriptor of the agent listing resource
pub fn agents_resource() -> Resource {
    let mut resource = RawResource::new(AGENTS_RESOURCE_URI, "agents");
    resource.description =
        Some("Every agent definition available as a tool, with its source file".to_string());
    resource.mime_type = Some("text/plain".to_string());
    resource.no_annotation()
}

/// Plain-text listing of `agents`, one block per agent
pub fn format_agent_list(agents: &[AgentDefinition]) -> String {
    if agents.is_empty() {
        return "No agents found.\n".to_string();
    }

    let mut text = format!("{} agent(s) available:\n", agents.len());
    for agent in agents {
        // Writing to a String cannot fail
        let _ = write!(
            text,
            "\n## {}\nDescription: {}\nTool: {}\nFile: {}\nLast modified: {}\n",
            agent.name,
            agent.description,
            agent.tool_name(),
            agent.file_path.display(),
            agent.last_modified.to_rfc3339(),
        );
        if let Some(agent_type) = agent.agent_type {
            let _ = writeln!(text, "Type: {agent_type}");
        }
        if let Some(model) = &agent.model {
            let _ = writeln!(text, "Model: {model}");
        }
    }
    text
}
