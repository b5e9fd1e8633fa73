//! Error types for command definition and invocation.

use thiserror::Error;

use super::OptionType;

/// Definition-time contract violations.
///
/// These indicate that a decorated handler disagrees with the options
/// declared for it. They are raised when signature binding runs and are
/// never retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandDefinitionError {
    /// More explicit options were declared than there are bindable parameters.
    #[error(
        "command '{command}' declares {options} options but its handler has {parameters} bindable parameters"
    )]
    OptionCountMismatch {
        /// Command name.
        command: String,
        /// Number of declared options.
        options: usize,
        /// Number of bindable handler parameters.
        parameters: usize,
    },

    /// The handler lacks the implicit leading parameters.
    #[error("handler for command '{command}' takes {found} parameters but needs at least {skip}")]
    MissingImplicitParameters {
        /// Command name.
        command: String,
        /// Number of implicit leading parameters expected.
        skip: usize,
        /// Number of parameters declared by the handler.
        found: usize,
    },

    /// A bindable parameter has no type and the policy rejects it.
    #[error("parameter '{parameter}' of command '{command}' has no type annotation")]
    UntypedParameter {
        /// Command name.
        command: String,
        /// Parameter name.
        parameter: String,
    },

    /// A command mixes plain options with subcommands.
    #[error("command '{0}' mixes plain options with subcommands")]
    MixedOptionKinds(String),

    /// An option reached schema generation without a name or type.
    #[error("option at position {position} of command '{command}' is unresolved")]
    UnresolvedOption {
        /// Command name.
        command: String,
        /// Zero-based option position.
        position: usize,
    },

    /// The schema could not be serialised.
    #[error("schema for command '{command}' could not be serialised: {reason}")]
    Serialisation {
        /// Command name.
        command: String,
        /// Serialiser failure reason.
        reason: String,
    },
}

/// Errors raised while resolving raw invocation arguments.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ArgumentError {
    /// The invocation supplied an option the command does not declare.
    #[error("unknown option '{option}' for command '{command}'")]
    UnknownOption {
        /// Command name.
        command: String,
        /// Unknown option name.
        option: String,
    },

    /// A required option was not supplied.
    #[error("missing required option '{option}' for command '{command}'")]
    MissingRequiredOption {
        /// Command name.
        command: String,
        /// Missing option name.
        option: String,
    },

    /// A supplied value does not match the declared option type.
    #[error("option '{option}' of command '{command}' expects a {expected} value")]
    TypeMismatch {
        /// Command name.
        command: String,
        /// Option name.
        option: String,
        /// Declared option type.
        expected: OptionType,
    },
}
