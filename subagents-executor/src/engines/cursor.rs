//! `cursor-agent` CLI executor

use super::push_common_args;
use crate::{AgentExecutor, ExecutionRequest};
use std::time::Duration;
use subagents_config::AgentType;

/// Executor that shells out to the cursor agent CLI
///
/// The CLI has no system prompt option, so the agent definition is sent
/// ahead of the instruction in the prompt itself.
#[derive(Debug, Clone)]
pub struct CursorExecutor {
    program: String,
    timeout: Duration,
}

impl CursorExecutor {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

impl AgentExecutor for CursorExecutor {
    fn agent_type(&self) -> AgentType {
        AgentType::Cursor
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
        push_common_args(&mut args, request, "--force");
        args.push(request.combined_prompt());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::sample_request;

    #[test]
    fn test_build_args() {
        let executor = CursorExecutor::new("cursor-agent", Duration::from_secs(1));
        let args = executor.build_args(&sample_request());
        assert_eq!(
            args,
            vec![
                "--print",
                "--output-format",
                "text",
                "--model",
                "sonnet",
                "--force",
                "--verbose",
                "You review code.\n\ncheck foo.ts",
            ]
        );
    }
}
