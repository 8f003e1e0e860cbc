//! Binary-level tests of the `subagents-mcp` command

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn subagents_mcp() -> Command {
    let mut cmd = Command::cargo_bin("subagents-mcp").unwrap();
    for var in [
        "SUBAGENTS_AGENTS_DIR",
        "SUBAGENTS_AGENT_TYPE",
        "SUBAGENTS_LOG_LEVEL",
        "SUBAGENTS_LOG_FILE",
        "SUBAGENTS_EXECUTION_TIMEOUT_MS",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn agents_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("code-reviewer.md"),
        "# Code Reviewer\nReviews code.",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("writer.txt"),
        "---\nagentType: claude\nmodel: opus\n---\nWrites docs.",
    )
    .unwrap();
    dir
}

#[test]
fn test_list_table() {
    let dir = agents_dir();
    subagents_mcp()
        .arg("--agents-dir")
        .arg(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("agent_code-reviewer"))
        .stdout(predicate::str::contains("agent_writer"))
        .stdout(predicate::str::contains("2 agent(s) found"));
}

#[test]
fn test_list_json_uses_env_directory() {
    let dir = agents_dir();
    let output = subagents_mcp()
        .env("SUBAGENTS_AGENTS_DIR", dir.path())
        .env("SUBAGENTS_AGENT_TYPE", "gemini")
        .args(["list", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let agents: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(agents[0]["toolName"], "agent_code-reviewer");
    assert_eq!(agents[0]["agentType"], "gemini");
    assert_eq!(agents[1]["agentType"], "claude");
    assert_eq!(agents[1]["model"], "opus");
}

#[test]
fn test_cli_flag_overrides_env() {
    let dir = agents_dir();
    let empty = TempDir::new().unwrap();
    subagents_mcp()
        .env("SUBAGENTS_AGENTS_DIR", empty.path())
        .arg("--agents-dir")
        .arg(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("agent_writer"));
}

#[test]
fn test_empty_directory_is_warning() {
    let empty = TempDir::new().unwrap();
    subagents_mcp()
        .arg("--agents-dir")
        .arg(empty.path())
        .arg("list")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No agents found"));
}

#[test]
fn test_missing_agents_dir_is_error() {
    subagents_mcp()
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("agents_dir is required"));
}

#[test]
fn test_unreadable_directory_is_error() {
    let dir = TempDir::new().unwrap();
    subagents_mcp()
        .arg("--agents-dir")
        .arg(dir.path().join("missing"))
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read agents directory"));
}

#[test]
fn test_invalid_agent_type_flag() {
    subagents_mcp()
        .args(["--agent-type", "copilot", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown agent type 'copilot'"));
}

#[test]
fn test_missing_config_file() {
    let dir = agents_dir();
    subagents_mcp()
        .arg("--agents-dir")
        .arg(dir.path())
        .args(["--config", "/nonexistent/subagents.toml", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
}
