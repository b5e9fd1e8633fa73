//! Top-level command wrapper and the signature-binding pass.

use std::fmt;

use super::base::{CommandNode, NodeCore};
use super::context_menu::ContextMenuCommand;
use super::root::Command;
use crate::interaction::domain::{
    ApplicationCommandSchema, CommandDefinitionError, CommandKind, UntypedParameterPolicy,
};
use crate::interaction::ports::SharedCog;

/// Any command that can be registered at the top level.
pub enum ApplicationCommand<C> {
    /// Slash command with its subcommand tree.
    Slash(Command<C>),
    /// User or message context-menu command.
    ContextMenu(ContextMenuCommand<C>),
}

impl<C> ApplicationCommand<C> {
    /// Returns the root node state.
    #[must_use]
    pub fn core(&self) -> &NodeCore<C> {
        match self {
            Self::Slash(command) => command.core(),
            Self::ContextMenu(command) => command.core(),
        }
    }

    /// Returns the command kind.
    #[must_use]
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Slash(command) => command.kind(),
            Self::ContextMenu(command) => command.kind(),
        }
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.core().name()
    }

    /// Returns the registration hint, if one was given.
    #[must_use]
    pub const fn sync_command(&self) -> Option<bool> {
        match self {
            Self::Slash(command) => command.sync_command(),
            Self::ContextMenu(command) => command.sync_command(),
        }
    }

    /// Assigns the owning cog to the whole tree, then binds option lists.
    ///
    /// This is the single pass that finalises a command; it runs once,
    /// when the command is registered.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError`] when any node's options disagree
    /// with its handler signature.
    pub fn bind(
        &mut self,
        cog: Option<SharedCog>,
        policy: UntypedParameterPolicy,
    ) -> Result<(), CommandDefinitionError> {
        match self {
            Self::Slash(command) => {
                command.assign_cog(cog);
                command.set_signature_option(policy)
            }
            Self::ContextMenu(command) => {
                command.assign_cog(cog);
                Ok(())
            }
        }
    }

    /// Builds the wire payload for this command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError::UnresolvedOption`] when the command
    /// has not been bound.
    pub fn schema(&self) -> Result<ApplicationCommandSchema, CommandDefinitionError> {
        match self {
            Self::Slash(command) => command.schema(),
            Self::ContextMenu(command) => Ok(command.schema()),
        }
    }
}

impl<C> From<Command<C>> for ApplicationCommand<C> {
    fn from(command: Command<C>) -> Self {
        Self::Slash(command)
    }
}

impl<C> From<ContextMenuCommand<C>> for ApplicationCommand<C> {
    fn from(command: ContextMenuCommand<C>) -> Self {
        Self::ContextMenu(command)
    }
}

impl<C> fmt::Debug for ApplicationCommand<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slash(command) => f.debug_tuple("Slash").field(command).finish(),
            Self::ContextMenu(command) => f.debug_tuple("ContextMenu").field(command).finish(),
        }
    }
}
