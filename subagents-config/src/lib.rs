//! Configuration for the subagents MCP bridge
//!
//! Settings are layered with figment, later sources overriding earlier ones:
//!
//! 1. Built-in defaults ([`ServerConfig::default`])
//! 2. An optional TOML file passed with `--config`
//! 3. `SUBAGENTS_`-prefixed environment variables
//! 4. Command line overrides ([`CliOverrides`])
//!
//! ```no_run
//! use subagents_config::ConfigProvider;
//!
//! let config = ConfigProvider::new().load()?;
//! println!("serving agents from {}", config.agents_dir()?.display());
//! # Ok::<(), subagents_config::ConfigError>(())
//! ```

pub mod agent;
pub mod error;
mod lenient;
pub mod provider;
pub mod types;

pub use agent::AgentType;
pub use error::{ConfigError, ConfigResult};
pub use provider::{CliOverrides, ConfigProvider, ENV_PREFIX};
pub use types::ServerConfig;
