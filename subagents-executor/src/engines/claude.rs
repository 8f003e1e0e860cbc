//! Claude Code CLI executor

use super::push_common_args;
use crate::{AgentExecutor, ExecutionRequest};
use std::time::Duration;
use subagents_config::AgentType;

/// Executor that shells out to the Claude Code CLI
#[derive(Debug, Clone)]
pub struct ClaudeExecutor {
    program: String,
    timeout: Duration,
}

impl ClaudeExecutor {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

impl AgentExecutor for ClaudeExecutor {
    fn agent_type(&self) -> AgentType {
        AgentType::Claude
    }

    fn program(&self) -> &str {
        &self.program
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn build_args(&self, request: &ExecutionRequest) -> Vec<String> {
        let mut args = vec![
            "--print".to_string(),
            "--output-format".to_string(),
            "text".to_string(),
        ];
        if !request.system_prompt.trim().is_empty() {
            args.push("--append-system-prompt".to_string());
            args.push(request.system_prompt.clone());
        }
        push_common_args(&mut args, request, "--dangerously-skip-permissions");
        args.push(request.instruction.clone());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::sample_request;

    #[test]
    fn test_build_args() {
        let executor = ClaudeExecutor::new("claude", Duration::from_secs(1));
        let args = executor.build_args(&sample_request());
        assert_eq!(
            args,
            vec![
                "--print",
                "--output-format",
                "text",
                "--append-system-prompt",
                "You review code.",
                "--model",
                "sonnet",
                "--dangerously-skip-permissions",
                "--verbose",
                "check foo.ts",
            ]
        );
    }

    #[test]
    fn test_empty_system_prompt_is_omitted() {
        let mut request = sample_request();
        request.system_prompt = String::new();
        request.model = None;
        request.auto_approve = false;
        request.extra_args.clear();

        let executor = ClaudeExecutor::new("claude", Duration::from_secs(1));
        assert_eq!(
            executor.build_args(&request),
            vec!["--print", "--output-format", "text", "check foo.ts"]
        );
    }
}
