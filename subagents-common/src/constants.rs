//! # Shared Constants
//!
//! Values that more than one crate needs to agree on. Limits that are part of
//! the client-visible contract live here so the validator, the schema and the
//! tests all read the same numbers.

/// Prefix applied to every agent tool name
pub const TOOL_NAME_PREFIX: &str = "agent_";

/// File extensions recognised as agent definitions
pub const AGENT_FILE_EXTENSIONS: &[&str] = &["md", "txt"];

/// Description used when a definition has no front-matter description,
/// no heading and no non-empty line
pub const FALLBACK_DESCRIPTION: &str = "No description available";

/// URI of the agent listing resource
pub const AGENTS_RESOURCE_URI: &str = "agents://list";

// Parameter limits

/// Maximum prompt length in characters (after trimming)
pub const MAX_PROMPT_LENGTH: usize = 50_000;

/// Maximum output instructions length in characters
pub const MAX_OUTPUT_INSTRUCTIONS_LENGTH: usize = 5_000;

/// Maximum working directory length in characters
pub const MAX_CWD_LENGTH: usize = 1_000;

/// Maximum number of extra arguments
pub const MAX_EXTRA_ARGS: usize = 20;

/// Maximum length of a single extra argument in characters
pub const MAX_EXTRA_ARG_LENGTH: usize = 1_000;

// Execution

/// Default wall-clock timeout for a single agent run (five minutes)
pub const DEFAULT_EXECUTION_TIMEOUT_MS: u64 = 300_000;

/// Administrative cap on the execution timeout (ten minutes)
pub const MAX_EXECUTION_TIMEOUT_MS: u64 = 600_000;

/// Grace period between SIGTERM and SIGKILL when a run times out
pub const TERMINATION_GRACE_MS: u64 = 5_000;

/// Exit code reported when the execution timeout fires
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Exit code of a process terminated by SIGTERM (128 + 15)
pub const SIGTERM_EXIT_CODE: i32 = 143;

/// Separator placed between the prompt and the output instructions
pub const INSTRUCTION_SEPARATOR: &str = "\n\n---\n\n";

/// Output instructions used when the caller supplies none
pub const DEFAULT_OUTPUT_INSTRUCTIONS: &str = "Please provide a concise summary of what you did and the outcome, and suggest any next steps.";

/// Response text when the engine produced neither stdout nor stderr
pub const NO_OUTPUT_PLACEHOLDER: &str = "(no output)";
