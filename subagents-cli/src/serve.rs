//! `serve` - run the MCP server on stdio

use anyhow::Context;
use subagents_config::ServerConfig;
use subagents_tools::mcp::serve_stdio;
use subagents_tools::McpServer;

/// Serve until the client disconnects
pub async fn run_serve(config: ServerConfig) -> anyhow::Result<()> {
    let server = McpServer::new(config).context("creating MCP server")?;

    let tool_count = server.list_tools().await.len();
    if tool_count == 0 {
        tracing::warn!(
            "⚠️ No agents found in {}; serving zero tools",
            server.config().agents_dir()?.display()
        );
    }

    serve_stdio(server).await?;
    Ok(())
}
