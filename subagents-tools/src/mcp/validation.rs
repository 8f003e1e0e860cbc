//! Validation of agent tool call arguments
//!
//! Arguments arrive as untyped JSON. Each rule below rejects with a message
//! naming the field and the violated constraint; clients match on the
//! substrings `required`, `too long`, `too many`, `must be a string` and
//! `invalid characters`.

use serde_json::{Map, Value};
use std::path::PathBuf;
use subagents_common::constants::{
    MAX_CWD_LENGTH, MAX_EXTRA_ARGS, MAX_EXTRA_ARG_LENGTH, MAX_OUTPUT_INSTRUCTIONS_LENGTH,
    MAX_PROMPT_LENGTH,
};
use subagents_common::{ErrorSeverity, Severity};
use thiserror::Error;

/// Rejected tool call arguments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Arguments were null or not a JSON object
    #[error("arguments must be an object")]
    NotAnObject,

    /// Required field missing, null or blank
    #[error("{field} is required")]
    Required {
        /// Field name
        field: &'static str,
    },

    /// Field present with the wrong JSON type
    #[error("{field} must be {expected}")]
    WrongType {
        /// Field name, with an index for array entries
        field: String,
        /// Expected JSON type
        expected: &'static str,
    },

    /// Field longer than its limit, in characters
    #[error("{field} is too long ({length} characters, maximum {max})")]
    TooLong {
        /// Field name, with an index for array entries
        field: String,
        /// Actual length
        length: usize,
        /// Limit
        max: usize,
    },

    /// Array with more entries than allowed
    #[error("{field} has too many entries ({count}, maximum {max})")]
    TooMany {
        /// Field name
        field: &'static str,
        /// Actual count
        count: usize,
        /// Limit
        max: usize,
    },

    /// Path containing `..` or NUL
    #[error("{field} contains invalid characters ('..' and NUL are not allowed)")]
    InvalidCharacters {
        /// Field name
        field: &'static str,
    },
}

impl Severity for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Warning
    }
}

/// Arguments of an agent tool call that passed validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedParams {
    /// Task for the agent, trimmed
    pub prompt: String,
    pub output_instructions: Option<String>,
    pub cwd: Option<PathBuf>,
    pub extra_args: Vec<String>,
}

/// Check raw call arguments against the agent tool schema
///
/// Missing and `null` optional fields are treated the same.
///
/// ```
/// use serde_json::json;
/// use subagents_tools::mcp::validate_params;
///
/// let params = validate_params(&json!({"prompt": "  review src/  "})).unwrap();
/// assert_eq!(params.prompt, "review src/");
///
/// let error = validate_params(&json!({})).unwrap_err();
/// assert!(error.to_string().contains("required"));
/// ```
pub fn validate_params(raw: &Value) -> Result<ValidatedParams, ValidationError> {
    let object = raw.as_object().ok_or(ValidationError::NotAnObject)?;
    let field = |name: &'static str| present(object, name);

    let prompt = match field("prompt") {
        None => return Err(ValidationError::Required { field: "prompt" }),
        Some(value) => expect_str("prompt", value)?.trim(),
    };
    if prompt.is_empty() {
        return Err(ValidationError::Required { field: "prompt" });
    }
    check_length("prompt", prompt, MAX_PROMPT_LENGTH)?;

    let output_instructions = field("output_instructions")
        .map(|value| {
            let text = expect_str("output_instructions", value)?;
            check_length("output_instructions", text, MAX_OUTPUT_INSTRUCTIONS_LENGTH)?;
            Ok(text.to_string())
        })
        .transpose()?;

    let cwd = field("cwd")
        .map(|value| {
            let text = expect_str("cwd", value)?;
            check_length("cwd", text, MAX_CWD_LENGTH)?;
            if text.contains("..") || text.contains('\0') {
                return Err(ValidationError::InvalidCharacters { field: "cwd" });
            }
            Ok(PathBuf::from(text))
        })
        .transpose()?;

    let extra_args = match field("extra_args") {
        None => Vec::new(),
        Some(Value::Array(entries)) => {
            if entries.len() > MAX_EXTRA_ARGS {
                return Err(ValidationError::TooMany {
                    field: "extra_args",
                    count: entries.len(),
                    max: MAX_EXTRA_ARGS,
                });
            }
            entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let name = format!("extra_args[{index}]");
                    let text = entry.as_str().ok_or_else(|| ValidationError::WrongType {
                        field: name.clone(),
                        expected: "a string",
                    })?;
                    check_length(&name, text, MAX_EXTRA_ARG_LENGTH)?;
                    Ok(text.to_string())
                })
                .collect::<Result<Vec<_>, _>>()?
        }
        Some(_) => {
            return Err(ValidationError::WrongType {
                field: "extra_args".into(),
                expected: "an array of strings",
            })
        }
    };

    Ok(ValidatedParams {
        prompt: prompt.to_string(),
        output_instructions,
        cwd,
        extra_args,
    })
}

fn present<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object.get(name).filter(|value| !value.is_null())
}

fn expect_str<'a>(field: &str, value: &'a Value) -> Result<&'a str, ValidationError> {
    value.as_str().ok_or_else(|| ValidationError::WrongType {
        field: field.to_string(),
        expected: "a string",
    })
}

fn check_length(field: &str, text: &str, max: usize) -> Result<(), ValidationError> {
    let length = text.chars().count();
    if length > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            length,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_full_params() {
        let params = validate_params(&json!({
            "prompt": "check foo.ts",
            "output_instructions": "List findings",
            "cwd": "/work/project",
            "extra_args": ["--verbose", "-q"],
        }))
        .unwrap();

        assert_eq!(
            params,
            ValidatedParams {
                prompt: "check foo.ts".into(),
                output_instructions: Some("List findings".into()),
                cwd: Some(PathBuf::from("/work/project")),
                extra_args: vec!["--verbose".into(), "-q".into()],
            }
        );
    }

    #[test]
    fn test_null_optionals_are_absent() {
        let params = validate_params(&json!({
            "prompt": "go",
            "output_instructions": null,
            "cwd": null,
            "extra_args": null,
        }))
        .unwrap();
        assert_eq!(params.output_instructions, None);
        assert_eq!(params.cwd, None);
        assert!(params.extra_args.is_empty());
    }

    #[test]
    fn test_prompt_length_boundary() {
        let at_limit = "a".repeat(MAX_PROMPT_LENGTH);
        assert!(validate_params(&json!({ "prompt": at_limit })).is_ok());

        let over = "a".repeat(MAX_PROMPT_LENGTH + 1);
        let error = validate_params(&json!({ "prompt": over })).unwrap_err();
        assert!(error.to_string().contains("too long"));
        assert!(error.to_string().contains("prompt"));
    }

    #[test]
    fn test_length_counts_characters() {
        let wide = "é".repeat(MAX_CWD_LENGTH);
        assert!(validate_params(&json!({ "prompt": "x", "cwd": wide })).is_ok());
    }

    #[rstest]
    #[case::null(json!(null), "must be an object")]
    #[case::array(json!(["prompt"]), "must be an object")]
    #[case::missing_prompt(json!({}), "prompt is required")]
    #[case::null_prompt(json!({"prompt": null}), "prompt is required")]
    #[case::blank_prompt(json!({"prompt": "  \n "}), "prompt is required")]
    #[case::numeric_prompt(json!({"prompt": 7}), "prompt must be a string")]
    #[case::long_instructions(
        json!({"prompt": "x", "output_instructions": "i".repeat(MAX_OUTPUT_INSTRUCTIONS_LENGTH + 1)}),
        "output_instructions is too long"
    )]
    #[case::long_cwd(json!({"prompt": "x", "cwd": "c".repeat(MAX_CWD_LENGTH + 1)}), "cwd is too long")]
    #[case::traversal(json!({"prompt": "x", "cwd": "/work/../etc"}), "invalid characters")]
    #[case::nul(json!({"prompt": "x", "cwd": "/work\u{0}"}), "invalid characters")]
    #[case::cwd_type(json!({"prompt": "x", "cwd": false}), "cwd must be a string")]
    #[case::args_type(json!({"prompt": "x", "extra_args": "--flag"}), "extra_args must be an array of strings")]
    #[case::args_entry_type(json!({"prompt": "x", "extra_args": ["ok", 3]}), "extra_args[1] must be a string")]
    #[case::too_many_args(
        json!({"prompt": "x", "extra_args": vec!["-v"; MAX_EXTRA_ARGS + 1]}),
        "too many"
    )]
    #[case::long_arg(
        json!({"prompt": "x", "extra_args": ["a".repeat(MAX_EXTRA_ARG_LENGTH + 1)]}),
        "extra_args[0] is too long"
    )]
    fn test_rejections(#[case] raw: Value, #[case] expected: &str) {
        let error = validate_params(&raw).unwrap_err();
        assert!(
            error.to_string().contains(expected),
            "'{error}' does not contain '{expected}'"
        );
    }

    #[test]
    fn test_max_extra_args_accepted() {
        let params = validate_params(&json!({
            "prompt": "x",
            "extra_args": vec!["-v"; MAX_EXTRA_ARGS],
        }))
        .unwrap();
        assert_eq!(params.extra_args.len(), MAX_EXTRA_ARGS);
    }
}
