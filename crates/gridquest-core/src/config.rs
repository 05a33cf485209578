//! Game configuration loaded from YAML.
//!
//! The configuration file is optional. Every key has a default matching the
//! built-in player stats, so an empty file and no file behave the same.
//!
//! ```yaml
//! players:
//!   health: 100
//!   power: 10
//!   gold: 10
//!   position: 0
//! ```

use std::path::Path;

use gridquest_types::PlayerDefaults;
use serde::Deserialize;

use crate::game::GameBuilder;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Starting stats for players created from a bare name.
    #[serde(default)]
    pub players: PlayerDefaults,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// A game builder that creates players with the configured stats.
    pub fn builder(&self) -> GameBuilder {
        GameBuilder::new().player_defaults(self.players)
    }
}
