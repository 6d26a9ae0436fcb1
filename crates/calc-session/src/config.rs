//! Session configuration.

use serde::Deserialize;
use thiserror::Error;

use calc_parser::DEFAULT_MAX_DEPTH;

/// Tunables for a [`crate::Session`].
///
/// Every field has a default, so `{}` is a valid JSON configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Maximum nesting of parentheses, calls and unary/power chains.
    pub max_depth: u32,
    /// Keep at most this many history records, dropping the oldest.
    /// `None` keeps everything.
    pub history_limit: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            history_limit: None,
        }
    }
}

/// Errors from loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl SessionConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Raise every setting to its smallest usable value.
    pub fn normalized(self) -> Self {
        if self.validate().is_ok() {
            return self;
        }
        tracing::warn!(
            max_depth = self.max_depth,
            history_limit = ?self.history_limit,
            "session configuration out of range, clamping"
        );
        Self {
            max_depth: self.max_depth.max(1),
            history_limit: self.history_limit.map(|n| n.max(1)),
        }
    }

    /// Reject settings no session could work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("maxDepth must be at least 1".into()));
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "historyLimit must be at least 1 (omit it for no limit)".into(),
            ));
        }
        Ok(())
    }
}
