//! Domain model for application command definitions.
//!
//! Options, handler signatures, and the reconciliation that binds one to
//! the other. Everything here is pure data and pure functions; handler
//! execution and permission checks live behind the ports.

mod argument;
mod error;
mod ids;
mod kind;
mod option;
mod reconcile;
mod schema;
mod signature;

pub use argument::{ArgumentValue, Arguments, resolve_arguments};
pub use error::{ArgumentError, CommandDefinitionError};
pub use ids::CommandId;
pub use kind::CommandKind;
pub use option::{CommandOption, DEFAULT_DESCRIPTION, OptionType};
pub use reconcile::{
    COG_HANDLER_SKIP, FREE_HANDLER_SKIP, UntypedParameterPolicy, reconcile_signature_options,
    skip_count,
};
pub use schema::{ApplicationCommandSchema, OptionSchema};
pub use signature::{HandlerSignature, OptionValueType, Parameter};
