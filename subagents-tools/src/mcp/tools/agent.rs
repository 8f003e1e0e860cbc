//! Tool that runs one agent definition through an execution engine

use crate::mcp::responses::{
    create_error_response, create_execution_response, ErrorKind, ExecutionReport,
};
use crate::mcp::statistics::{ToolStatistics, ToolStatisticsSnapshot};
use crate::mcp::tool_registry::{McpTool, ToolContext};
use crate::mcp::validation::validate_params;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde_json::{json, Map, Value};
use subagents_agents::{AgentDefinition, AgentError};
use subagents_executor::{ExecutionRequest, ExecutorFactory};

/// Argument schema shared by every agent tool
pub fn agent_tool_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "prompt": {
                "type": "string",
                "description": "The task or question for the agent"
            },
            "output_instructions": {
                "type": "string",
                "description": "How the agent should format its final answer. Defaults to a short summary with suggested next steps"
            },
            "cwd": {
                "type": "string",
                "description": "Working directory for the agent process"
            },
            "extra_args": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Additional command line arguments passed to the execution engine"
            }
        },
        "required": ["prompt"]
    })
}

/// One agent exposed as an MCP tool
///
/// The tool keeps only the agent's name and listing text. The definition is
/// read again from disk on each call so edits apply without a restart.
#[derive(Debug)]
pub struct AgentTool {
    agent_name: String,
    tool_name: String,
    description: String,
    statistics: ToolStatistics,
}

impl AgentTool {
    pub fn new(agent: &AgentDefinition) -> Self {
        let description = match &agent.model {
            Some(model) => format!("{} (model: {})", agent.description, model),
            None => agent.description.clone(),
        };
        Self {
            agent_name: agent.name.clone(),
            tool_name: agent.tool_name(),
            description,
            statistics: ToolStatistics::new(),
        }
    }

    /// Name of the agent behind this tool
    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    fn error(&self, kind: ErrorKind, message: String) -> CallToolResult {
        tracing::warn!("🔧 {} failed ({}): {}", self.tool_name, kind.as_str(), message);
        create_error_response(kind, &self.tool_name, message)
    }
}

#[async_trait]
impl McpTool for AgentTool {
    fn name(&self) -> &str {
        &self.tool_name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        agent_tool_schema()
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let params = match validate_params(&Value::Object(arguments)) {
            Ok(params) => params,
            Err(e) => return Ok(self.error(ErrorKind::Validation, e.to_string())),
        };

        let agent = match context.loader.get_agent(&self.agent_name).await {
            Ok(Some(agent)) => agent,
            Ok(None) => {
                return Ok(self.error(
                    ErrorKind::AgentNotFound,
                    format!("Agent '{}' not found", self.agent_name),
                ))
            }
            Err(e @ AgentError::InvalidName { .. }) => {
                return Ok(self.error(ErrorKind::AgentNotFound, e.to_string()))
            }
            Err(e) => return Ok(self.error(ErrorKind::Discovery, e.to_string())),
        };

        let agent_type = agent.effective_agent_type(context.config.agent_type);
        let executor = ExecutorFactory::create(agent_type, &context.config);
        let request = ExecutionRequest::for_agent(
            &agent,
            &params.prompt,
            params.output_instructions.as_deref(),
        )
        .with_cwd(params.cwd)
        .with_extra_args(params.extra_args);

        tracing::info!(
            "🤖 Agent '{}' starting on {} engine",
            agent.name,
            agent_type
        );
        let outcome = match executor.execute(&request).await {
            Ok(outcome) => outcome,
            Err(e) => return Ok(self.error(ErrorKind::Spawn, e.to_string())),
        };
        self.statistics.record(outcome.execution_time_ms);

        Ok(create_execution_response(ExecutionReport {
            agent: &agent.name,
            tool_name: &self.tool_name,
            agent_type,
            model: agent.model.as_deref(),
            outcome: &outcome,
            statistics: self.statistics.snapshot(),
        }))
    }

    fn statistics(&self) -> Option<ToolStatisticsSnapshot> {
        Some(self.statistics.snapshot())
    }
}
