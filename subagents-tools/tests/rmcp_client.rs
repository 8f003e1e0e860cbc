//! Drives the server through a real MCP client over an in-memory pipe

use rmcp::model::{CallToolRequestParam, ReadResourceRequestParam};
use rmcp::ServiceExt;
use serde_json::json;
use subagents_config::ServerConfig;
use subagents_tools::McpServer;
use tempfile::TempDir;

#[tokio::test]
async fn test_client_round_trip() {
    let agents = TempDir::new().unwrap();
    std::fs::write(
        agents.path().join("code-reviewer.md"),
        "# Code Reviewer\nReviews code.",
    )
    .unwrap();

    let mut config = ServerConfig::for_agents_dir(agents.path());
    config.server_name = "test-bridge".into();
    let server = McpServer::new(config).unwrap();

    let (server_io, client_io) = tokio::io::duplex(64 * 1024);
    let server_task = tokio::spawn(async move {
        let running = server.serve(server_io).await?;
        running.waiting().await?;
        anyhow::Ok(())
    });

    let client = ().serve(client_io).await.unwrap();

    let info = client.peer_info().unwrap();
    assert_eq!(info.server_info.name, "test-bridge");
    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.resources.is_some());

    let tools = client.list_all_tools().await.unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, "agent_code-reviewer");

    let resources = client.list_all_resources().await.unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].uri, "agents://list");

    let listing = client
        .read_resource(ReadResourceRequestParam {
            uri: "agents://list".into(),
        })
        .await
        .unwrap();
    assert_eq!(listing.contents.len(), 1);

    let invalid = client
        .read_resource(ReadResourceRequestParam {
            uri: "agents://other".into(),
        })
        .await;
    assert!(format!("{:?}", invalid.unwrap_err()).contains("Invalid resource URI"));

    let unknown = client
        .call_tool(CallToolRequestParam {
            name: "agent_missing".into(),
            arguments: Some(json!({"prompt": "go"}).as_object().unwrap().clone()),
        })
        .await;
    assert!(format!("{:?}", unknown.unwrap_err()).contains("Unknown tool"));

    let invalid_args = client
        .call_tool(CallToolRequestParam {
            name: "agent_code-reviewer".into(),
            arguments: None,
        })
        .await
        .unwrap();
    assert_eq!(invalid_args.is_error, Some(true));

    client.cancel().await.unwrap();
    server_task.await.unwrap().unwrap();
}
