//! Layering tests for environment variables, config files and CLI overrides

use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use subagents_config::{AgentType, CliOverrides, ConfigError, ConfigProvider};

const VARS: &[&str] = &[
    "SUBAGENTS_AGENTS_DIR",
    "SUBAGENTS_AGENT_TYPE",
    "SUBAGENTS_LOG_LEVEL",
    "SUBAGENTS_EXECUTION_TIMEOUT_MS",
    "SUBAGENTS_SERVER_NAME",
    "SUBAGENTS_CLAUDE_PATH",
    "SUBAGENTS_SERVER_VERSION",
];

/// Clears the variables this suite touches, before and after each test
struct EnvGuard;

impl EnvGuard {
    fn new() -> Self {
        for var in VARS {
            std::env::remove_var(var);
        }
        Self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for var in VARS {
            std::env::remove_var(var);
        }
    }
}

#[test]
#[serial]
fn test_env_variables_are_read() {
    let _guard = EnvGuard::new();
    std::env::set_var("SUBAGENTS_AGENTS_DIR", "/srv/agents");
    std::env::set_var("SUBAGENTS_AGENT_TYPE", "claude");
    std::env::set_var("SUBAGENTS_EXECUTION_TIMEOUT_MS", "1500");
    std::env::set_var("SUBAGENTS_CLAUDE_PATH", "/opt/bin/claude");

    let config = ConfigProvider::new().load().unwrap();
    assert_eq!(config.agents_dir, Some(PathBuf::from("/srv/agents")));
    assert_eq!(config.agent_type, AgentType::Claude);
    assert_eq!(config.execution_timeout_ms, 1500);
    assert_eq!(config.claude_path, "/opt/bin/claude");
}

#[test]
#[serial]
fn test_numeric_looking_text_values() {
    let _guard = EnvGuard::new();
    std::env::set_var("SUBAGENTS_AGENTS_DIR", "2024");
    std::env::set_var("SUBAGENTS_SERVER_VERSION", "1.0");
    std::env::set_var("SUBAGENTS_CLAUDE_PATH", "1.0");

    let config = ConfigProvider::new().load().unwrap();
    assert_eq!(config.agents_dir, Some(PathBuf::from("2024")));
    assert_eq!(config.server_version, "1.0");
    assert_eq!(config.claude_path, "1.0");
}

#[test]
#[serial]
fn test_missing_agents_dir_fails() {
    let _guard = EnvGuard::new();
    let error = ConfigProvider::new().load().unwrap_err();
    assert!(matches!(error, ConfigError::ValidationError { .. }));
}

#[test]
#[serial]
fn test_timeout_is_clamped_to_ten_minutes() {
    let _guard = EnvGuard::new();
    std::env::set_var("SUBAGENTS_AGENTS_DIR", "/srv/agents");
    std::env::set_var("SUBAGENTS_EXECUTION_TIMEOUT_MS", "3600000");

    let config = ConfigProvider::new().load().unwrap();
    assert_eq!(config.execution_timeout_ms, 600_000);
}

#[test]
#[serial]
fn test_invalid_agent_type_is_a_parse_error() {
    let _guard = EnvGuard::new();
    std::env::set_var("SUBAGENTS_AGENTS_DIR", "/srv/agents");
    std::env::set_var("SUBAGENTS_AGENT_TYPE", "copilot");

    let error = ConfigProvider::new().load().unwrap_err();
    assert!(matches!(error, ConfigError::ParseError { .. }));
}

#[test]
#[serial]
fn test_empty_server_name_is_rejected() {
    let _guard = EnvGuard::new();
    std::env::set_var("SUBAGENTS_AGENTS_DIR", "/srv/agents");
    std::env::set_var("SUBAGENTS_SERVER_NAME", " ");

    let error = ConfigProvider::new().load().unwrap_err();
    assert!(error.to_string().contains("server_name"));
}

#[test]
#[serial]
fn test_precedence_file_then_env_then_cli() {
    let _guard = EnvGuard::new();
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "agents_dir = \"/from/file\"\nagent_type = \"gemini\"\nlog_level = \"debug\""
    )
    .unwrap();

    std::env::set_var("SUBAGENTS_AGENT_TYPE", "claude");

    let config = ConfigProvider::new()
        .with_config_file(file.path())
        .with_overrides(CliOverrides {
            agents_dir: Some(PathBuf::from("/from/cli")),
            ..Default::default()
        })
        .load()
        .unwrap();

    assert_eq!(config.agents_dir, Some(PathBuf::from("/from/cli")));
    assert_eq!(config.agent_type, AgentType::Claude);
    assert_eq!(config.log_level, "debug");
}
