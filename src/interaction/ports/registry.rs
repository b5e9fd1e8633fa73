//! Command registry port.
//!
//! The registry stores bound commands for lookup by the dispatcher.

use std::sync::Arc;
use thiserror::Error;

use crate::interaction::domain::CommandKind;
use crate::interaction::nodes::RegisteredCommand;

/// Result type for command registry operations.
pub type CommandRegistryResult<T> = Result<T, CommandRegistryError>;

/// Storage contract for registered commands.
pub trait CommandRegistry<C>: Send + Sync {
    /// Stores a registered command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError::Duplicate`] when a command of the
    /// same kind and name is already stored.
    fn register(&self, command: Arc<RegisteredCommand<C>>) -> CommandRegistryResult<()>;

    /// Finds a command by kind and name.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError`] when registry access fails.
    fn find(
        &self,
        kind: CommandKind,
        name: &str,
    ) -> CommandRegistryResult<Option<Arc<RegisteredCommand<C>>>>;

    /// Lists all commands in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError`] when registry access fails.
    fn list(&self) -> CommandRegistryResult<Vec<Arc<RegisteredCommand<C>>>>;
}

/// Errors for command registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandRegistryError {
    /// A command with the same kind and name already exists.
    #[error("duplicate {kind} command '{name}'")]
    Duplicate {
        /// Command kind.
        kind: CommandKind,
        /// Command name.
        name: String,
    },

    /// General storage or adapter failure.
    #[error("command registry unavailable: {0}")]
    Unavailable(String),
}
