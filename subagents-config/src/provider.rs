//! Configuration provider using Figment

use crate::{AgentType, ConfigError, ConfigResult, ServerConfig};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::Serialize;
use std::path::PathBuf;
use subagents_common::Pretty;
use tracing::{debug, trace};

/// Prefix of every environment variable read by the server
pub const ENV_PREFIX: &str = "SUBAGENTS_";

/// Values supplied on the command line; unset fields leave lower layers alone
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<AgentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Configuration provider using figment
///
/// Nothing is cached; every [`load`](ConfigProvider::load) reads the file and
/// the environment again.
#[derive(Debug, Default)]
pub struct ConfigProvider {
    config_file: Option<PathBuf>,
    overrides: CliOverrides,
}

impl ConfigProvider {
    /// Create a provider that reads defaults and the environment only
    pub fn new() -> Self {
        Self::default()
    }

    /// Also read a TOML configuration file
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Apply command line overrides on top of every other source
    pub fn with_overrides(mut self, overrides: CliOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Load, clamp and validate the server configuration
    pub fn load(&self) -> ConfigResult<ServerConfig> {
        let mut config: ServerConfig = self.build_figment()?.extract()?;
        config.normalize();
        config.validate()?;
        debug!("Loaded configuration: {}", Pretty(&config));
        Ok(config)
    }

    /// Build the figment configuration with all sources in precedence order
    fn build_figment(&self) -> ConfigResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(ServerConfig::default()));

        if let Some(path) = &self.config_file {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound { path: path.clone() });
            }
            trace!("Loading config file: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(&self.overrides)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_skip_unset_fields() {
        let overrides = CliOverrides {
            agent_type: Some(AgentType::Gemini),
            ..Default::default()
        };
        let figment = Figment::from(Serialized::defaults(ServerConfig::for_agents_dir("/a")))
            .merge(Serialized::defaults(&overrides));
        let config: ServerConfig = figment.extract().unwrap();
        assert_eq!(config.agent_type, AgentType::Gemini);
        assert_eq!(config.agents_dir, Some(PathBuf::from("/a")));
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let error = ConfigProvider::new()
            .with_config_file("/definitely/not/here.toml")
            .load()
            .unwrap_err();
        assert!(matches!(error, ConfigError::FileNotFound { .. }));
    }
}
