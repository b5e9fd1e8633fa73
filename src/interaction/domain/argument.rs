//! Invocation argument values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ArgumentError, CommandOption, OptionType};

/// A value supplied for one option of an invocation.
///
/// Plain JSON does not say which variant a number is, so decoded values
/// are normalised against the declared option type by [`ArgumentValue::coerce`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    /// String value.
    String(String),
    /// Integer value.
    Integer(i64),
    /// Platform snowflake referencing a user, channel, role, or attachment.
    Snowflake(u64),
    /// Boolean value.
    Boolean(bool),
    /// Floating-point value.
    Number(f64),
}

impl ArgumentValue {
    /// Returns `true` when the value may be bound to an option of `option_type`.
    #[must_use]
    pub const fn matches(&self, option_type: OptionType) -> bool {
        match self {
            Self::String(_) => matches!(option_type, OptionType::String),
            Self::Integer(_) => matches!(option_type, OptionType::Integer),
            Self::Boolean(_) => matches!(option_type, OptionType::Boolean),
            Self::Number(_) => matches!(option_type, OptionType::Number),
            Self::Snowflake(_) => option_type.is_reference(),
        }
    }

    /// Converts the value into the variant expected for `option_type`.
    ///
    /// Whole numbers become numbers or snowflakes, and snowflakes sent as
    /// decimal strings are parsed. Returns `None` when no conversion exists.
    #[must_use]
    pub fn coerce(&self, option_type: OptionType) -> Option<Self> {
        if self.matches(option_type) {
            return Some(self.clone());
        }
        match (self, option_type) {
            (Self::Integer(value), OptionType::Number) => {
                Some(Self::Number(integer_to_number(*value)))
            }
            (Self::Integer(value), reference) if reference.is_reference() => {
                u64::try_from(*value).ok().map(Self::Snowflake)
            }
            (Self::String(value), reference) if reference.is_reference() => {
                value.parse().ok().map(Self::Snowflake)
            }
            (Self::Snowflake(value), OptionType::Integer) => {
                i64::try_from(*value).ok().map(Self::Integer)
            }
            _ => None,
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "JSON numbers are doubles, so larger integers were never exact"
)]
const fn integer_to_number(value: i64) -> f64 {
    value as f64
}

/// Resolved invocation arguments keyed by handler parameter name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arguments {
    values: BTreeMap<String, ArgumentValue>,
}

impl Arguments {
    /// Creates an empty argument set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Adds a value for a handler parameter.
    #[must_use]
    pub fn with(mut self, parameter: impl Into<String>, value: ArgumentValue) -> Self {
        self.values.insert(parameter.into(), value);
        self
    }

    /// Returns the value bound to a handler parameter.
    #[must_use]
    pub fn get(&self, parameter: &str) -> Option<&ArgumentValue> {
        self.values.get(parameter)
    }

    /// Returns a string argument.
    #[must_use]
    pub fn string(&self, parameter: &str) -> Option<&str> {
        match self.get(parameter) {
            Some(ArgumentValue::String(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns an integer argument.
    #[must_use]
    pub fn integer(&self, parameter: &str) -> Option<i64> {
        match self.get(parameter) {
            Some(ArgumentValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns a boolean argument.
    #[must_use]
    pub fn boolean(&self, parameter: &str) -> Option<bool> {
        match self.get(parameter) {
            Some(ArgumentValue::Boolean(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns a snowflake argument.
    #[must_use]
    pub fn snowflake(&self, parameter: &str) -> Option<u64> {
        match self.get(parameter) {
            Some(ArgumentValue::Snowflake(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the number of bound arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no arguments are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Validates raw invocation values against reconciled options.
///
/// `provided` is keyed by option name as seen on the wire; the result is
/// keyed by the bound handler parameter name.
///
/// # Errors
///
/// Returns [`ArgumentError`] when an option is unknown, a required option is
/// missing, or a value cannot be coerced to its option type.
pub fn resolve_arguments<'o>(
    command: &str,
    options: impl IntoIterator<Item = &'o CommandOption>,
    provided: &BTreeMap<String, ArgumentValue>,
) -> Result<Arguments, ArgumentError> {
    let declared: Vec<&CommandOption> = options.into_iter().collect();
    if let Some(unknown) = provided
        .keys()
        .find(|key| !declared.iter().any(|option| option.name.as_ref() == Some(*key)))
    {
        return Err(ArgumentError::UnknownOption {
            command: command.to_owned(),
            option: unknown.clone(),
        });
    }

    let mut arguments = Arguments::new();
    for option in &declared {
        let (Some(name), Some(parameter)) = (&option.name, &option.parameter_name) else {
            continue;
        };
        match provided.get(name) {
            Some(value) => {
                let bound = match option.option_type {
                    Some(expected) => value.coerce(expected).ok_or_else(|| {
                        ArgumentError::TypeMismatch {
                            command: command.to_owned(),
                            option: name.clone(),
                            expected,
                        }
                    })?,
                    None => value.clone(),
                };
                arguments.values.insert(parameter.clone(), bound);
            }
            None if option.required => {
                return Err(ArgumentError::MissingRequiredOption {
                    command: command.to_owned(),
                    option: name.clone(),
                });
            }
            None => {}
        }
    }
    Ok(arguments)
}
