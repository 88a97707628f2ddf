//! Game configuration
//!
//! Settings come from an optional TOML file; command line flags override them.

use crate::core::{DEFAULT_BUDGET, DEFAULT_PLACEHOLDER};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest budget that still lets every letter of the alphabet be missed
pub const MAX_BUDGET: usize = 26;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("mistake budget must be between 1 and {max}, got {0}", max = MAX_BUDGET)]
    InvalidBudget(usize),
    #[error("placeholder must not be a letter or whitespace, got '{0}'")]
    InvalidPlaceholder(char),
}

/// Rules and sources for a session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Misses allowed before a round is lost
    pub mistake_budget: usize,
    /// Character shown for hidden letters
    pub placeholder: char,
    /// Word list file; the embedded list is used when unset
    pub word_list: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mistake_budget: DEFAULT_BUDGET,
            placeholder: DEFAULT_PLACEHOLDER,
            word_list: None,
        }
    }
}

impl GameConfig {
    /// Load a config file
    ///
    /// Values are not range checked here; call `validate` once command line
    /// overrides have been applied.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply command line overrides
    #[must_use]
    pub fn with_overrides(mut self, budget: Option<usize>, word_list: Option<PathBuf>) -> Self {
        if let Some(budget) = budget {
            self.mistake_budget = budget;
        }
        if word_list.is_some() {
            self.word_list = word_list;
        }
        self
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for a budget outside `1..=MAX_BUDGET` or a
    /// placeholder that could be confused with a letter.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(1..=MAX_BUDGET).contains(&self.mistake_budget) {
            return Err(ConfigError::InvalidBudget(self.mistake_budget));
        }
        if self.placeholder.is_alphabetic() || self.placeholder.is_whitespace() {
            return Err(ConfigError::InvalidPlaceholder(self.placeholder));
        }
        Ok(self)
    }
}
