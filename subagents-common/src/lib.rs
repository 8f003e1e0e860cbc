//! # Subagents Common
//!
//! Foundational pieces shared by every crate in the workspace:
//!
//! - [`constants`] - limits, defaults and fixed strings used across crates
//! - [`error`] - the [`Severity`] trait every crate error implements
//! - [`logging`] - the [`Pretty`] wrapper for structured log output

pub mod constants;
pub mod error;
pub mod logging;

pub use error::{ErrorSeverity, Severity};
pub use logging::Pretty;
