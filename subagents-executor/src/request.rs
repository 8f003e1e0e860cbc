//! What an engine is asked to do

use std::path::PathBuf;
use subagents_agents::AgentDefinition;
use subagents_common::constants::{DEFAULT_OUTPUT_INSTRUCTIONS, INSTRUCTION_SEPARATOR};

/// Join the caller's prompt and the output instructions
///
/// The separator and the default instructions are always present; there is
/// no form of the instruction without them.
pub fn compose_instruction(prompt: &str, output_instructions: Option<&str>) -> String {
    let instructions = output_instructions.unwrap_or(DEFAULT_OUTPUT_INSTRUCTIONS);
    format!("{prompt}{INSTRUCTION_SEPARATOR}{instructions}")
}

/// Everything an engine needs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    /// Agent definition body, given to the engine as its role
    pub system_prompt: String,
    /// Composed task instruction
    pub instruction: String,
    pub model: Option<String>,
    /// Let the engine act without asking for confirmation
    pub auto_approve: bool,
    pub cwd: Option<PathBuf>,
    /// Appended verbatim to the engine invocation
    pub extra_args: Vec<String>,
}

impl ExecutionRequest {
    /// Request for `agent` with the prompt and output instructions composed
    pub fn for_agent(
        agent: &AgentDefinition,
        prompt: &str,
        output_instructions: Option<&str>,
    ) -> Self {
        Self {
            system_prompt: agent.content.clone(),
            instruction: compose_instruction(prompt, output_instructions),
            model: agent.model.clone(),
            auto_approve: agent.auto_approval_mode.unwrap_or(false),
            cwd: None,
            extra_args: Vec::new(),
        }
    }

    pub fn with_cwd(mut self, cwd: Option<PathBuf>) -> Self {
        self.cwd = cwd;
        self
    }

    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }

    /// System prompt and instruction as one text, for engines without a
    /// separate system prompt flag
    pub fn combined_prompt(&self) -> String {
        if self.system_prompt.trim().is_empty() {
            self.instruction.clone()
        } else {
            format!("{}\n\n{}", self.system_prompt, self.instruction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent_with_body(body: &str) -> AgentDefinition {
        AgentDefinition::parse(
            "helper",
            PathBuf::from("/agents/helper.md"),
            Default::default(),
            body,
        )
    }

    #[test]
    fn test_default_output_instructions() {
        let instruction = compose_instruction("check foo.ts", None);
        assert_eq!(
            instruction,
            format!("check foo.ts\n\n---\n\n{}", DEFAULT_OUTPUT_INSTRUCTIONS)
        );
    }

    #[test]
    fn test_custom_output_instructions() {
        let instruction = compose_instruction("do it", Some("Reply in JSON"));
        assert_eq!(instruction, "do it\n\n---\n\nReply in JSON");
    }

    #[test]
    fn test_for_agent_carries_metadata() {
        let agent = agent_with_body("---\nmodel: fast\nautoApprovalMode: true\n---\nYou help.");
        let request = ExecutionRequest::for_agent(&agent, "go", None)
            .with_cwd(Some(PathBuf::from("/work")))
            .with_extra_args(vec!["--verbose".into()]);

        assert_eq!(request.system_prompt, "You help.");
        assert_eq!(request.model.as_deref(), Some("fast"));
        assert!(request.auto_approve);
        assert_eq!(request.cwd, Some(PathBuf::from("/work")));
        assert_eq!(request.extra_args, vec!["--verbose"]);
        assert!(request.combined_prompt().starts_with("You help.\n\ngo"));
    }
}
