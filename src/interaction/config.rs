//! Client configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interaction::domain::UntypedParameterPolicy;

/// Settings applied when commands are registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Whether commands without an explicit hint are pushed to the platform.
    pub sync_commands: bool,
    /// Treatment of untyped handler parameters during signature binding.
    pub untyped_parameters: UntypedParameterPolicy,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            sync_commands: true,
            untyped_parameters: UntypedParameterPolicy::Drop,
        }
    }
}

/// Error returned when configuration cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid interaction configuration: {0}")]
pub struct ConfigError(#[from] serde_json::Error);

impl InteractionConfig {
    /// Creates a configuration that drops untyped parameters.
    #[must_use]
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Creates a configuration that rejects untyped parameters and syncs
    /// only commands that ask for it.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            sync_commands: false,
            untyped_parameters: UntypedParameterPolicy::Reject,
        }
    }

    /// Parses a configuration from JSON; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is malformed.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Sets the default sync behaviour.
    #[must_use]
    pub const fn with_sync_commands(mut self, sync: bool) -> Self {
        self.sync_commands = sync;
        self
    }

    /// Sets the untyped parameter policy.
    #[must_use]
    pub const fn with_untyped_parameters(mut self, policy: UntypedParameterPolicy) -> Self {
        self.untyped_parameters = policy;
        self
    }
}
