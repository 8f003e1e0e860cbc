//! Gemini CLI executor

use super::push_common_args;
use crate::{AgentExecutor, ExecutionRequest};
use std::time::Duration;
use subagents_config::AgentType;

/// Executor that shells out to the Gemini CLI in non-interactive mode
#[derive(Debug, Clone)]
pub struct GeminiExecutor {
    program: String,
    timeout: Duration,
}

impl GeminiExecutor {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

impl AgentExecutor for GeminiExecutor {
    fn agent_type(&self) -> AgentType {
        AgentType::Gemini
    }

    fn program(&self) -> &str {
        &self.program
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn build_args(&self, request: &ExecutionRequest) -> Vec<String> {
        let mut args = Vec::new();
        push_common_args(&mut args, request, "--yolo");
        args.push("--prompt".to_string());
        args.push(request.combined_prompt());
        args
    }
}
