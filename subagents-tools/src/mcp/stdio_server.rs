//! Stdio transport for the MCP server
//!
//! Stdout carries the protocol, so nothing else may write to it while the
//! server runs.

use crate::mcp::server::McpServer;
use rmcp::service::QuitReason;
use rmcp::serve_server;
use rmcp::transport::stdio;
use subagents_common::{ErrorSeverity, Severity};
use thiserror::Error;

/// Failures of the stdio server itself
#[derive(Debug, Error)]
pub enum StdioServerError {
    /// The MCP handshake with the client failed
    #[error("failed to initialize MCP stdio server: {0}")]
    Initialize(String),

    /// The service task ended abnormally
    #[error("MCP stdio server task failed: {0}")]
    Task(String),
}

impl Severity for StdioServerError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Critical
    }
}

/// Serve `server` over stdin/stdout until the client disconnects
pub async fn serve_stdio(server: McpServer) -> Result<QuitReason, StdioServerError> {
    tracing::info!(
        "Starting MCP server '{}' v{} in stdio mode",
        server.config().server_name,
        server.config().server_version
    );

    let running_service = serve_server(server, stdio())
        .await
        .map_err(|e| StdioServerError::Initialize(e.to_string()))?;
    tracing::info!("MCP stdio server started successfully");

    let quit_reason = running_service
        .waiting()
        .await
        .map_err(|e| StdioServerError::Task(e.to_string()))?;
    tracing::info!("MCP stdio server completed: {:?}", quit_reason);
    Ok(quit_reason)
}
