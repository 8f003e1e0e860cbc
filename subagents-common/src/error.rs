//! Error severity shared by every crate error type
//!
//! Each crate defines its own `thiserror` enum. Implementing [`Severity`] lets
//! the front-end pick a log level and an exit code without knowing the
//! concrete error type.

/// Severity levels for error classification
///
/// # Examples
///
/// ```rust
/// use subagents_common::ErrorSeverity;
///
/// // A single unreadable agent file is skipped
/// let skipped_file = ErrorSeverity::Warning;
///
/// // A spawn failure fails one tool call
/// let spawn_failure = ErrorSeverity::Error;
///
/// // An unreadable agents directory leaves the server with nothing to serve
/// let missing_dir = ErrorSeverity::Critical;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Potential issue but operation can proceed
    Warning,

    /// Operation failed but the server keeps serving other requests
    Error,

    /// The server cannot do useful work until the cause is fixed
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Trait for error types that have severity levels
///
/// # Example
///
/// ```rust
/// use subagents_common::{ErrorSeverity, Severity};
///
/// #[derive(Debug)]
/// enum LoadError {
///     DirectoryMissing,
///     BadFile,
/// }
///
/// impl Severity for LoadError {
///     fn severity(&self) -> ErrorSeverity {
///         match self {
///             LoadError::DirectoryMissing => ErrorSeverity::Critical,
///             LoadError::BadFile => ErrorSeverity::Warning,
///         }
///     }
/// }
///
/// assert_eq!(LoadError::BadFile.severity(), ErrorSeverity::Warning);
/// ```
pub trait Severity {
    /// Get the severity level of this error
    fn severity(&self) -> ErrorSeverity;
}
