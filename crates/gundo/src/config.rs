#![forbid(unsafe_code)]

//! Configuration for [`Sequence`](crate::Sequence) behavior.
//!
//! Defaults reproduce the classic unbounded history: every action is kept
//! until it is superseded or cleared, and every mutation notifies observers.
//!
//! With the `config` feature, a configuration can be loaded from TOML or JSON:
//!
//! ```toml
//! # gundo.toml
//! max_depth = 200
//! notify = true
//! ```
//!
//! ```rust,ignore
//! let config = SequenceConfig::from_toml_file("gundo.toml")?;
//! let seq = Sequence::with_config(config);
//! ```

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "config")]
use crate::error::ConfigError;

/// Tunables for a [`Sequence`](crate::Sequence).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SequenceConfig {
    /// Maximum number of undoable records kept at the top level.
    ///
    /// `usize::MAX` means unlimited. When exceeded, the oldest record is
    /// disposed.
    pub max_depth: usize,
    /// Whether mutations notify subscribers.
    pub notify: bool,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            max_depth: usize::MAX,
            notify: true,
        }
    }
}

impl SequenceConfig {
    /// Create a configuration with a bounded undo depth.
    #[must_use]
    pub fn bounded(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Set the maximum undo depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable notifications.
    #[must_use]
    pub fn with_notify(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }

    /// Whether a depth limit is in effect.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.max_depth != usize::MAX
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.max_depth == 0 {
            errors.push("max_depth must be at least 1".to_string());
        }
        errors
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.checked()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        config.checked()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    #[cfg(feature = "config")]
    fn checked(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
