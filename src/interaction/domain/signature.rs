//! Explicit handler parameter metadata.
//!
//! Handlers describe their own parameter list, including the implicit
//! leading receiver and context parameters, so option schemas can be
//! derived without runtime reflection.

use serde::{Deserialize, Serialize};

use super::OptionType;

/// Maps a Rust value type to the option type it is declared as.
pub trait OptionValueType {
    /// Option type for the value.
    const OPTION_TYPE: OptionType;
    /// Whether a parameter of this type can be omitted.
    const HAS_DEFAULT: bool = false;
}

impl OptionValueType for String {
    const OPTION_TYPE: OptionType = OptionType::String;
}

impl OptionValueType for i64 {
    const OPTION_TYPE: OptionType = OptionType::Integer;
}

impl OptionValueType for bool {
    const OPTION_TYPE: OptionType = OptionType::Boolean;
}

impl OptionValueType for f64 {
    const OPTION_TYPE: OptionType = OptionType::Number;
}

impl<T: OptionValueType> OptionValueType for Option<T> {
    const OPTION_TYPE: OptionType = T::OPTION_TYPE;
    const HAS_DEFAULT: bool = true;
}

/// One declared handler parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter identifier.
    pub name: String,
    /// Declared type, if any.
    pub annotation: Option<OptionType>,
    /// Whether the parameter declares a default value.
    pub has_default: bool,
}

impl Parameter {
    /// Creates a parameter without type information.
    #[must_use]
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            has_default: false,
        }
    }

    /// Creates a parameter with an explicit option type.
    #[must_use]
    pub fn typed(name: impl Into<String>, annotation: OptionType) -> Self {
        Self {
            name: name.into(),
            annotation: Some(annotation),
            has_default: false,
        }
    }

    /// Creates a parameter typed after a Rust value type.
    ///
    /// `Option<T>` parameters are treated as having a default.
    #[must_use]
    pub fn of<T: OptionValueType>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: Some(T::OPTION_TYPE),
            has_default: T::HAS_DEFAULT,
        }
    }

    /// Marks the parameter as having a default value.
    #[must_use]
    pub const fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }
}

/// Ordered parameter list of a command handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerSignature {
    parameters: Vec<Parameter>,
}

impl HandlerSignature {
    /// Creates an empty signature.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parameters: Vec::new(),
        }
    }

    /// Appends the implicit grouping receiver parameter.
    #[must_use]
    pub fn receiver(self) -> Self {
        self.parameter(Parameter::untyped("self"))
    }

    /// Appends the implicit invocation-context parameter.
    #[must_use]
    pub fn context(self) -> Self {
        self.parameter(Parameter::untyped("ctx"))
    }

    /// Appends a parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Returns the parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Returns the number of declared parameters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns `true` when no parameters are declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl FromIterator<Parameter> for HandlerSignature {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self {
            parameters: iter.into_iter().collect(),
        }
    }
}
