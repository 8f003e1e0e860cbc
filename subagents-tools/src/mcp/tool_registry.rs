//! Tool registry for agent tools
//!
//! Every agent definition becomes one [`McpTool`] registered under its
//! sanitized name (`agent_<name>`). Sanitizing can map distinct agent names to
//! the same tool name. The registry keeps the last one registered and logs
//! every collision.
//!
//! # Collision logging
//!
//! [`register_agent_tools`] emits one `warn!` per collision, naming the tool,
//! the agent that becomes unreachable and the agent that replaces it. It then
//! emits an `error!` summary header followed by one `error!` per collision
//! group:
//!
//! ```text
//! ⚠️ Tool name collision: 'agent_code_review' from agent 'code review' replaces agent 'code.review'
//! ❌ 1 tool name collision(s) hid 1 agent(s)
//! ❌ agent_code_review: agents [code.review, code review]; accessible: 'code review'; hidden: 'code.review'
//! ```
//!
//! Agents whose names [`validate_agent_name`] rejects are never registered,
//! since every call to them would fail.

use crate::mcp::statistics::ToolStatisticsSnapshot;
use crate::mcp::tools::agent::AgentTool;
use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use rmcp::ErrorData as McpError;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use subagents_agents::{validate_agent_name, AgentDefinition, AgentLoader};
use subagents_config::ServerConfig;

/// Shared context handed to every tool call
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Re-reads agent definitions at call time
    pub loader: AgentLoader,
    /// Engine paths, default engine and timeout
    pub config: Arc<ServerConfig>,
}

impl ToolContext {
    pub fn new(loader: AgentLoader, config: Arc<ServerConfig>) -> Self {
        Self { loader, config }
    }
}

/// A callable MCP tool
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique tool name within the registry
    fn name(&self) -> &str;

    /// Human-readable description shown in tool listings
    fn description(&self) -> &str;

    /// JSON schema of the call arguments
    fn schema(&self) -> serde_json::Value;

    /// Run the tool
    ///
    /// Failures of a known tool are reported as a result with `is_error`
    /// set; `Err` is reserved for protocol-level misuse.
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;

    /// Running statistics, for tools that keep them
    fn statistics(&self) -> Option<ToolStatisticsSnapshot> {
        None
    }
}

/// Registry mapping tool names to tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool, returning the tool it replaced, if any
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) -> Option<Arc<dyn McpTool>> {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool))
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.tools.get(name).cloned()
    }

    /// Registered tool names, sorted
    pub fn list_tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// All tools as MCP `Tool` descriptors, sorted by name
    pub fn list_tools(&self) -> Vec<Tool> {
        let mut tools: Vec<Tool> = self
            .tools
            .values()
            .map(|tool| {
                let schema = match tool.schema() {
                    serde_json::Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };
                Tool::new(
                    tool.name().to_string(),
                    tool.description().to_string(),
                    Arc::new(schema),
                )
            })
            .collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    /// Statistics of every tool that keeps them, keyed by tool name
    pub fn statistics(&self) -> BTreeMap<String, ToolStatisticsSnapshot> {
        self.tools
            .iter()
            .filter_map(|(name, tool)| tool.statistics().map(|stats| (name.clone(), stats)))
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Remove every tool
    pub fn clear(&mut self) {
        self.tools.clear();
    }
}

/// Register one [`AgentTool`] per agent, in order
///
/// Agents with names that cannot be looked up at call time are skipped with a
/// warning. A later agent whose tool name is already taken replaces the
/// earlier one. Returns the collision groups: tool name to every agent name that claimed
/// it, in registration order. Empty when there were no collisions.
pub fn register_agent_tools(
    registry: &mut ToolRegistry,
    agents: &[AgentDefinition],
) -> BTreeMap<String, Vec<String>> {
    let mut claimants: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for agent in agents {
        if let Err(e) = validate_agent_name(&agent.name) {
            tracing::warn!(
                "⚠️ Skipping agent file {}: {}",
                agent.file_path.display(),
                e
            );
            continue;
        }

        let tool = AgentTool::new(agent);
        let tool_name = tool.name().to_string();

        registry.register(tool);

        let names = claimants.entry(tool_name.clone()).or_default();
        if let Some(replaced) = names.last() {
            tracing::warn!(
                "⚠️ Tool name collision: '{}' from agent '{}' replaces agent '{}'",
                tool_name,
                agent.name,
                replaced
            );
        }
        names.push(agent.name.clone());
    }

    claimants.retain(|_, names| names.len() > 1);
    if !claimants.is_empty() {
        log_collision_summary(&claimants);
    }
    claimants
}

fn log_collision_summary(collisions: &BTreeMap<String, Vec<String>>) {
    let hidden_count: usize = collisions.values().map(|names| names.len() - 1).sum();
    tracing::error!(
        "❌ {} tool name collision(s) hid {} agent(s)",
        collisions.len(),
        hidden_count
    );

    for (tool_name, names) in collisions {
        let Some((accessible, hidden)) = names.split_last() else {
            continue;
        };
        let hidden: Vec<String> = hidden.iter().map(|name| format!("'{name}'")).collect();
        tracing::error!(
            "❌ {}: agents [{}]; accessible: '{}'; hidden: {}",
            tool_name,
            names.join(", "),
            accessible,
            hidden.join(", ")
        );
    }
}
