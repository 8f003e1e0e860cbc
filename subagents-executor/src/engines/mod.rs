//! Command line builders for the supported engines

mod claude;
mod cursor;
mod gemini;

pub use claude::ClaudeExecutor;
pub use cursor::CursorExecutor;
pub use gemini::GeminiExecutor;

use crate::ExecutionRequest;

/// Flags shared by every engine: model selection, auto-approval, extra args
fn push_common_args(
    args: &mut Vec<String>,
    request: &ExecutionRequest,
    auto_approve_flag: &str,
) {
    if let Some(model) = &request.model {
        args.push("--model".to_string());
        args.push(model.clone());
    }
    if request.auto_approve {
        args.push(auto_approve_flag.to_string());
    }
    args.extend(request.extra_args.iter().cloned());
}

#[cfg(test)]
pub(crate) fn sample_request() -> ExecutionRequest {
    ExecutionRequest {
        system_prompt: "You review code.".into(),
        instruction: "check foo.ts".into(),
        model: Some("sonnet".into()),
        auto_approve: true,
        cwd: None,
        extra_args: vec!["--verbose".into()],
    }
}
