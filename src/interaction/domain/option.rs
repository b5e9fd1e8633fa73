//! Command option model and platform option types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Description applied when a command or option does not supply one.
pub const DEFAULT_DESCRIPTION: &str = "No description.";

/// Platform type tag for a command option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    /// Free-form string value.
    String,
    /// Signed integer value.
    Integer,
    /// Boolean value.
    Boolean,
    /// Reference to a user.
    User,
    /// Reference to a channel.
    Channel,
    /// Reference to a role.
    Role,
    /// Reference to a user or a role.
    Mentionable,
    /// Floating-point value.
    Number,
    /// Uploaded attachment.
    Attachment,
}

impl OptionType {
    /// Returns the numeric type tag used in the platform's command payloads.
    #[must_use]
    pub const fn wire_value(self) -> u8 {
        match self {
            Self::String => 3,
            Self::Integer => 4,
            Self::Boolean => 5,
            Self::User => 6,
            Self::Channel => 7,
            Self::Role => 8,
            Self::Mentionable => 9,
            Self::Number => 10,
            Self::Attachment => 11,
        }
    }

    /// Returns `true` for types whose values are platform snowflakes.
    #[must_use]
    pub const fn is_reference(self) -> bool {
        matches!(
            self,
            Self::User | Self::Channel | Self::Role | Self::Mentionable | Self::Attachment
        )
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::User => "user",
            Self::Channel => "channel",
            Self::Role => "role",
            Self::Mentionable => "mentionable",
            Self::Number => "number",
            Self::Attachment => "attachment",
        };
        f.write_str(label)
    }
}

/// One parameter of an application command.
///
/// Options are either declared explicitly by the developer or synthesised
/// blank during signature reconciliation. Unset fields are filled from the
/// bound handler parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    /// Option name shown to users; defaults to the parameter name.
    #[serde(default)]
    pub name: Option<String>,
    /// Human-readable description.
    #[serde(default = "default_description")]
    pub description: String,
    /// Option type; defaults to the parameter's declared type.
    #[serde(default)]
    pub option_type: Option<OptionType>,
    /// Whether the option must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Name of the handler parameter this option binds to.
    #[serde(default)]
    pub parameter_name: Option<String>,
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_owned()
}

impl Default for CommandOption {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandOption {
    /// Creates a blank option whose fields are resolved later.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: None,
            description: default_description(),
            option_type: None,
            required: false,
            parameter_name: None,
        }
    }

    /// Sets the option name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the option description.
    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the option type explicitly.
    #[must_use]
    pub const fn with_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Some(option_type);
        self
    }

    /// Marks the option as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Returns `true` once name, type, and parameter binding are all known.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.name.is_some() && self.option_type.is_some() && self.parameter_name.is_some()
    }
}
