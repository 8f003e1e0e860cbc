//! Logging helpers

use serde::Serialize;
use std::fmt::Debug;

/// Wrapper for pretty-printing types in logs as YAML
///
/// ```ignore
/// use subagents_common::Pretty;
/// use tracing::debug;
///
/// debug!("Loaded configuration: {}", Pretty(&config));
/// ```
///
/// Output starts with a newline. Debug formatting is used when YAML
/// serialization fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> Pretty<T> {
    fn render(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(f)
    }
}

impl<T: Serialize + Debug> std::fmt::Debug for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_renders_yaml_with_leading_newline() {
        let value = serde_json::json!({ "agent": "code-reviewer", "exitCode": 0 });
        let rendered = format!("{}", Pretty(&value));
        assert!(rendered.starts_with('\n'));
        assert!(rendered.contains("agent: code-reviewer"));
        assert!(rendered.contains("exitCode: 0"));
    }
}
