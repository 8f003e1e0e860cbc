//! MCP server exposing agent definitions as tools

use crate::mcp::resources::{agents_resource, format_agent_list};
use crate::mcp::statistics::ToolStatisticsSnapshot;
use crate::mcp::tool_registry::{register_agent_tools, ToolContext, ToolRegistry};
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use std::collections::BTreeMap;
use std::sync::Arc;
use subagents_agents::AgentLoader;
use subagents_common::constants::AGENTS_RESOURCE_URI;
use subagents_config::{ConfigResult, ServerConfig};
use tokio::sync::RwLock;

/// Server instructions displayed to MCP clients
const SERVER_INSTRUCTIONS: &str = "Each agent_* tool runs a specialised agent on a task. \
     Pass the task as `prompt`. Read agents://list to see every agent and its source file.";

/// MCP server for a directory of agent definitions
///
/// The tool registry is built from the directory the first time tools are
/// needed and reused until [`McpServer::clear_tool_cache`] empties it. Agent
/// definitions themselves are re-read on every call.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<ServerConfig>,
    loader: AgentLoader,
    tool_registry: Arc<RwLock<ToolRegistry>>,
    tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a server for `config`
    ///
    /// # Errors
    ///
    /// Returns a validation error when `agents_dir` is not set.
    pub fn new(config: ServerConfig) -> ConfigResult<Self> {
        let loader = AgentLoader::new(config.agents_dir()?);
        let config = Arc::new(config);
        let tool_context = Arc::new(ToolContext::new(loader.clone(), config.clone()));

        tracing::debug!(
            "Created MCP server '{}' for {}",
            config.server_name,
            loader.agents_dir().display()
        );
        Ok(Self {
            config,
            loader,
            tool_registry: Arc::new(RwLock::new(ToolRegistry::new())),
            tool_context,
        })
    }

    /// Effective configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the registry if it is empty
    ///
    /// A failed scan leaves the registry empty, so the server keeps running
    /// with no tools rather than failing.
    async fn ensure_tools(&self) {
        if !self.tool_registry.read().await.is_empty() {
            return;
        }

        let agents = match self.loader.list_agents().await {
            Ok(agents) => agents,
            Err(e) => {
                tracing::error!("❌ Failed to load agents, serving no tools: {}", e);
                return;
            }
        };

        let mut fresh = ToolRegistry::new();
        register_agent_tools(&mut fresh, &agents);

        let mut registry = self.tool_registry.write().await;
        // Another request may have built it while we were scanning
        if registry.is_empty() {
            *registry = fresh;
            tracing::info!("📋 Registered {} agent tool(s)", registry.len());
        }
    }

    /// Every registered tool, sorted by name
    pub async fn list_tools(&self) -> Vec<Tool> {
        self.ensure_tools().await;
        self.tool_registry.read().await.list_tools()
    }

    /// Registered tool names, sorted
    pub async fn list_tool_names(&self) -> Vec<String> {
        self.ensure_tools().await;
        self.tool_registry.read().await.list_tool_names()
    }

    /// Run the tool called `name`
    ///
    /// # Errors
    ///
    /// Returns an `invalid_request` error containing "Unknown tool" when no
    /// such tool is registered. Every failure of a known tool is returned as
    /// a result with `is_error` set instead.
    pub async fn execute_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.ensure_tools().await;
        let tool = self.tool_registry.read().await.get_tool(name);
        let tool = tool.ok_or_else(|| {
            tracing::error!("🔧 Unknown tool requested: {}", name);
            McpError::invalid_request(format!("Unknown tool: {name}"), None)
        })?;

        tracing::info!("🔧 Executing tool: {}", name);
        let result = tool.execute(arguments, &self.tool_context).await;
        match &result {
            Ok(call) if call.is_error == Some(true) => {
                tracing::warn!("🔧 Tool {} returned an error result", name)
            }
            Ok(_) => tracing::info!("🔧 Tool {} completed", name),
            Err(e) => tracing::error!("🔧 Tool {} failed: {}", name, e),
        }
        result
    }

    /// Empty the tool registry; the next request rebuilds it from disk
    pub async fn clear_tool_cache(&self) {
        self.tool_registry.write().await.clear();
        tracing::debug!("Tool cache cleared");
    }

    /// Statistics of every registered tool, keyed by tool name
    ///
    /// Clearing the tool cache discards them.
    pub async fn tool_statistics(&self) -> BTreeMap<String, ToolStatisticsSnapshot> {
        self.tool_registry.read().await.statistics()
    }

    /// Text of the `agents://list` resource
    pub async fn agents_listing(&self) -> std::result::Result<String, McpError> {
        let agents = self.loader.list_agents().await.map_err(|e| {
            tracing::error!("Failed to list agents: {}", e);
            McpError::internal_error(e.to_string(), None)
        })?;
        Ok(format_agent_list(&agents))
    }

    fn server_implementation(&self) -> Implementation {
        Implementation {
            name: self.config.server_name.clone(),
            version: self.config.server_version.clone(),
            ..Implementation::from_build_env()
        }
    }
}

impl ServerHandler for McpServer {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        self.ensure_tools().await;
        let tools = self.tool_registry.read().await.list_tools();
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!(
            "🔧 call_tool() invoked for tool: {}, arguments: {:?}",
            request.name,
            request.arguments
        );
        self.execute_tool(&request.name, request.arguments.unwrap_or_default())
            .await
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(vec![agents_resource()]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        if request.uri != AGENTS_RESOURCE_URI {
            tracing::warn!("Invalid resource URI requested: {}", request.uri);
            return Err(McpError::resource_not_found(
                format!("Invalid resource URI: {}", request.uri),
                None,
            ));
        }

        let text = self.agents_listing().await?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, request.uri)],
        })
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: self.server_implementation(),
            instructions: Some(SERVER_INSTRUCTIONS.into()),
        }
    }
}
