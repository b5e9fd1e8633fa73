//! Wire-level application command schema.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{CommandDefinitionError, CommandKind, CommandOption};

/// Platform payload describing one top-level application command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationCommandSchema {
    /// Command name.
    pub name: String,
    /// Command type tag.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Command description; empty for context-menu commands.
    pub description: String,
    /// Options or subcommands in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionSchema>,
}

/// Platform payload describing one option, subcommand, or group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSchema {
    /// Option type tag.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Option name.
    pub name: String,
    /// Option description.
    pub description: String,
    /// Whether the option must be supplied.
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    /// Nested options of a subcommand or group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<Self>,
}

const fn is_false(value: &bool) -> bool {
    !*value
}

impl OptionSchema {
    /// Builds the payload for a reconciled option.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError::UnresolvedOption`] when the option
    /// has no name or type.
    pub fn from_option(
        command: &str,
        position: usize,
        option: &CommandOption,
    ) -> Result<Self, CommandDefinitionError> {
        let (Some(name), Some(option_type)) = (&option.name, option.option_type) else {
            return Err(CommandDefinitionError::UnresolvedOption {
                command: command.to_owned(),
                position,
            });
        };
        Ok(Self {
            kind: option_type.wire_value(),
            name: name.clone(),
            description: option.description.clone(),
            required: option.required,
            options: Vec::new(),
        })
    }

    /// Builds the payload for a subcommand or group node.
    #[must_use]
    pub fn node(
        kind: CommandKind,
        name: impl Into<String>,
        description: impl Into<String>,
        options: Vec<Self>,
    ) -> Self {
        Self {
            kind: kind.wire_value(),
            name: name.into(),
            description: description.into(),
            required: false,
            options,
        }
    }
}

impl ApplicationCommandSchema {
    /// Returns the SHA-256 hex digest of the serialised schema.
    ///
    /// Identical schemas always produce identical fingerprints, so callers
    /// can compare them against the remotely registered version.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError::Serialisation`] when the schema
    /// cannot be serialised.
    pub fn fingerprint(&self) -> Result<String, CommandDefinitionError> {
        let canonical =
            serde_json::to_vec(self).map_err(|error| CommandDefinitionError::Serialisation {
                command: self.name.clone(),
                reason: error.to_string(),
            })?;
        let digest = Sha256::digest(&canonical);
        Ok(format!("{digest:x}"))
    }
}
