//! User and message context-menu commands.

use std::fmt;

use super::base::{CommandNode, NodeAttributes, NodeCore};
use crate::interaction::domain::{ApplicationCommandSchema, CommandKind};
use crate::interaction::ports::{SharedCog, SharedHandler};

/// Context-menu action on a user or a message.
///
/// Context-menu commands take no options; the platform supplies the target
/// user or message as the single argument.
pub struct ContextMenuCommand<C> {
    core: NodeCore<C>,
    kind: CommandKind,
    sync_command: Option<bool>,
}

impl<C> ContextMenuCommand<C> {
    pub(crate) fn new(
        handler: SharedHandler<C>,
        kind: CommandKind,
        attributes: NodeAttributes<C>,
    ) -> Self {
        Self {
            core: NodeCore::new(
                handler,
                attributes.name,
                String::new(),
                attributes.checks,
            ),
            kind,
            sync_command: attributes.sync_command,
        }
    }

    /// Returns the registration hint, if one was given.
    #[must_use]
    pub const fn sync_command(&self) -> Option<bool> {
        self.sync_command
    }

    /// Returns the handler parameter that receives the target.
    ///
    /// Falls back to `target` when the handler declares no bindable
    /// parameter.
    #[must_use]
    pub fn target_parameter(&self) -> &str {
        self.core
            .signature()
            .parameters()
            .get(self.core.skip())
            .map_or("target", |parameter| parameter.name.as_str())
    }

    pub(crate) fn assign_cog(&mut self, cog: Option<SharedCog>) {
        self.core.assign_cog(cog);
    }

    /// Builds the wire payload for this command.
    #[must_use]
    pub fn schema(&self) -> ApplicationCommandSchema {
        ApplicationCommandSchema {
            name: self.core.name().to_owned(),
            kind: self.kind.wire_value(),
            description: String::new(),
            options: Vec::new(),
        }
    }
}

impl<C> CommandNode<C> for ContextMenuCommand<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn kind(&self) -> CommandKind {
        self.kind
    }
}

impl<C> fmt::Debug for ContextMenuCommand<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextMenuCommand")
            .field("core", &self.core)
            .field("kind", &self.kind)
            .field("sync_command", &self.sync_command)
            .finish()
    }
}
