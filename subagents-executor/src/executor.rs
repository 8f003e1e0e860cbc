//! Agent executor trait and factory

use crate::engines::{ClaudeExecutor, CursorExecutor, GeminiExecutor};
use crate::process::run_with_timeout;
use crate::{ExecutionOutcome, ExecutionRequest, ExecutorError, ExecutorResult};
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use subagents_config::{AgentType, ServerConfig};

/// One external engine able to run agent requests
#[async_trait]
pub trait AgentExecutor: Send + Sync {
    /// Engine this executor drives
    fn agent_type(&self) -> AgentType;

    /// Executable name or path
    fn program(&self) -> &str;

    /// Wall-clock limit for one run
    fn timeout(&self) -> Duration;

    /// Command line arguments for `request`
    fn build_args(&self, request: &ExecutionRequest) -> Vec<String>;

    /// Run `request` and capture the result
    async fn execute(&self, request: &ExecutionRequest) -> ExecutorResult<ExecutionOutcome> {
        let program = resolve_program(self.program()).await?;

        let mut command = std::process::Command::new(&program);
        command.args(self.build_args(request));
        if let Some(cwd) = &request.cwd {
            command.current_dir(cwd);
        }

        tracing::info!(
            "🚀 Running {} engine ({}) with timeout {}ms",
            self.agent_type(),
            program.display(),
            self.timeout().as_millis()
        );
        let outcome = run_with_timeout(command, self.timeout()).await?;
        tracing::info!(
            "✅ {} engine finished: exit code {}, {}ms, status {}",
            self.agent_type(),
            outcome.exit_code,
            outcome.execution_time_ms,
            outcome.status()
        );
        Ok(outcome)
    }
}

/// Locate `program` on `PATH` without blocking the runtime
pub async fn resolve_program(program: &str) -> ExecutorResult<PathBuf> {
    let name = program.to_string();
    let lookup = tokio::task::spawn_blocking(move || which::which(name))
        .await
        .map_err(|e| ExecutorError::Io(std::io::Error::other(e)))?;
    lookup.map_err(|_| ExecutorError::ExecutableNotFound {
        program: program.to_string(),
    })
}

/// Factory for creating agent executors
pub struct ExecutorFactory;

impl ExecutorFactory {
    /// Executor for `agent_type` using the paths and timeout in `config`
    pub fn create(agent_type: AgentType, config: &ServerConfig) -> Box<dyn AgentExecutor> {
        let program = config.executable_for(agent_type).to_string();
        let timeout = config.execution_timeout();
        match agent_type {
            AgentType::Cursor => Box::new(CursorExecutor::new(program, timeout)),
            AgentType::Claude => Box::new(ClaudeExecutor::new(program, timeout)),
            AgentType::Gemini => Box::new(GeminiExecutor::new(program, timeout)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_uses_configured_paths() {
        let mut config = ServerConfig::for_agents_dir("/agents");
        config.claude_path = "/opt/claude".into();
        config.execution_timeout_ms = 42;

        let executor = ExecutorFactory::create(AgentType::Claude, &config);
        assert_eq!(executor.agent_type(), AgentType::Claude);
        assert_eq!(executor.program(), "/opt/claude");
        assert_eq!(executor.timeout(), Duration::from_millis(42));

        for agent_type in AgentType::ALL {
            assert_eq!(ExecutorFactory::create(agent_type, &config).agent_type(), agent_type);
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_resolve_program() {
        let sh = resolve_program("sh").await.unwrap();
        assert!(sh.is_absolute());

        let error = resolve_program("definitely-not-an-installed-engine")
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            ExecutorError::ExecutableNotFound { ref program } if program == "definitely-not-an-installed-engine"
        ));
    }

    #[tokio::test]
    async fn test_missing_executable() {
        let mut config = ServerConfig::for_agents_dir("/agents");
        config.cursor_path = "definitely-not-an-installed-engine".into();

        let executor = ExecutorFactory::create(AgentType::Cursor, &config);
        let request = ExecutionRequest {
            system_prompt: String::new(),
            instruction: "hi".into(),
            model: None,
            auto_approve: false,
            cwd: None,
            extra_args: Vec::new(),
        };
        let error = executor.execute(&request).await.unwrap_err();
        assert!(matches!(error, ExecutorError::ExecutableNotFound { .. }));
    }
}
