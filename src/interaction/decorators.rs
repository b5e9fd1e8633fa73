//! Decorator factories for command nodes.
//!
//! Each factory returns a builder collecting the command's attributes;
//! `decorate` wraps a handler into the node and returns it. Builders
//! obtained from a node attach the new child to that node immediately.
//!
//! ```ignore
//! let mut tag = command().description("Manage tags").decorate(tag_handler);
//! tag.subcommand().name("add").decorate(add_handler);
//! let admin = tag.subcommand_group().name("admin").decorate(admin_handler);
//! admin.subcommand().name("purge").decorate(purge_handler);
//! ```

use std::sync::Arc;

use crate::interaction::domain::{CommandKind, CommandOption};
use crate::interaction::nodes::{
    Command, ContextMenuCommand, NodeAttributes, Subcommand, SubcommandGroup,
};
use crate::interaction::ports::{CommandHandler, SharedCheck, SharedHandler};

/// Starts declaring a slash command.
#[must_use]
pub fn command<C>() -> CommandBuilder<C> {
    CommandBuilder {
        attributes: NodeAttributes::default(),
    }
}

/// Starts declaring a user context-menu command.
#[must_use]
pub fn user<C>() -> ContextMenuBuilder<C> {
    ContextMenuBuilder {
        kind: CommandKind::User,
        attributes: NodeAttributes::default(),
    }
}

/// Starts declaring a message context-menu command.
#[must_use]
pub fn context<C>() -> ContextMenuBuilder<C> {
    ContextMenuBuilder {
        kind: CommandKind::Message,
        attributes: NodeAttributes::default(),
    }
}

/// Builder for slash commands.
pub struct CommandBuilder<C> {
    attributes: NodeAttributes<C>,
}

impl<C> CommandBuilder<C> {
    /// Sets the command name; defaults to the handler name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.attributes.name = Some(name.into());
        self
    }

    /// Sets the command description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.attributes.description = description.into();
        self
    }

    /// Adds a check evaluated before the handler runs.
    #[must_use]
    pub fn check(mut self, check: SharedCheck<C>) -> Self {
        self.attributes.checks.push(check);
        self
    }

    /// Adds several checks in order.
    #[must_use]
    pub fn checks(mut self, checks: impl IntoIterator<Item = SharedCheck<C>>) -> Self {
        self.attributes.checks.extend(checks);
        self
    }

    /// Declares the next option explicitly.
    #[must_use]
    pub fn option(mut self, option: CommandOption) -> Self {
        self.attributes.options.push(option);
        self
    }

    /// Declares several options in parameter order.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = CommandOption>) -> Self {
        self.attributes.options.extend(options);
        self
    }

    /// Sets the registration hint.
    #[must_use]
    pub const fn sync_command(mut self, sync: bool) -> Self {
        self.attributes.sync_command = Some(sync);
        self
    }

    /// Wraps a handler into a slash command.
    pub fn decorate(self, handler: impl CommandHandler<C> + 'static) -> Command<C> {
        self.decorate_shared(Arc::new(handler))
    }

    /// Wraps an already shared handler into a slash command.
    pub fn decorate_shared(self, handler: SharedHandler<C>) -> Command<C> {
        Command::new(handler, self.attributes)
    }
}

/// Builder for user and message context-menu commands.
pub struct ContextMenuBuilder<C> {
    kind: CommandKind,
    attributes: NodeAttributes<C>,
}

impl<C> ContextMenuBuilder<C> {
    /// Sets the command name; defaults to the handler name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.attributes.name = Some(name.into());
        self
    }

    /// Adds a check evaluated before the handler runs.
    #[must_use]
    pub fn check(mut self, check: SharedCheck<C>) -> Self {
        self.attributes.checks.push(check);
        self
    }

    /// Adds several checks in order.
    #[must_use]
    pub fn checks(mut self, checks: impl IntoIterator<Item = SharedCheck<C>>) -> Self {
        self.attributes.checks.extend(checks);
        self
    }

    /// Sets the registration hint.
    #[must_use]
    pub const fn sync_command(mut self, sync: bool) -> Self {
        self.attributes.sync_command = Some(sync);
        self
    }

    /// Wraps a handler into a context-menu command.
    pub fn decorate(self, handler: impl CommandHandler<C> + 'static) -> ContextMenuCommand<C> {
        ContextMenuCommand::new(Arc::new(handler), self.kind, self.attributes)
    }
}

/// Node a subcommand is declared under.
pub enum SubcommandParent<'a, C> {
    /// Directly beneath a slash command.
    Root(&'a mut Command<C>),
    /// Inside a subcommand group.
    Group(&'a mut SubcommandGroup<C>),
}

/// Builder for subcommands.
pub struct SubcommandBuilder<'a, C> {
    parent: SubcommandParent<'a, C>,
    attributes: NodeAttributes<C>,
}

impl<'a, C> SubcommandBuilder<'a, C> {
    pub(crate) fn new(parent: SubcommandParent<'a, C>) -> Self {
        Self {
            parent,
            attributes: NodeAttributes::default(),
        }
    }

    /// Sets the subcommand name; defaults to the handler name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.attributes.name = Some(name.into());
        self
    }

    /// Sets the subcommand description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.attributes.description = description.into();
        self
    }

    /// Adds a check evaluated before the handler runs.
    #[must_use]
    pub fn check(mut self, check: SharedCheck<C>) -> Self {
        self.attributes.checks.push(check);
        self
    }

    /// Adds several checks in order.
    #[must_use]
    pub fn checks(mut self, checks: impl IntoIterator<Item = SharedCheck<C>>) -> Self {
        self.attributes.checks.extend(checks);
        self
    }

    /// Declares the next option explicitly.
    #[must_use]
    pub fn option(mut self, option: CommandOption) -> Self {
        self.attributes.options.push(option);
        self
    }

    /// Declares several options in parameter order.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = CommandOption>) -> Self {
        self.attributes.options.extend(options);
        self
    }

    /// Wraps a handler into a subcommand and appends it to the parent.
    pub fn decorate(self, handler: impl CommandHandler<C> + 'static) -> &'a mut Subcommand<C> {
        let Self { parent, attributes } = self;
        let shared: SharedHandler<C> = Arc::new(handler);
        match parent {
            SubcommandParent::Root(root) => {
                let lineage = root.child_lineage();
                root.attach_subcommand(Subcommand::new(shared, lineage, attributes))
            }
            SubcommandParent::Group(group) => {
                let lineage = group.child_lineage();
                group.attach(Subcommand::new(shared, lineage, attributes))
            }
        }
    }
}

/// Builder for subcommand groups.
pub struct SubcommandGroupBuilder<'a, C> {
    parent: &'a mut Command<C>,
    attributes: NodeAttributes<C>,
}

impl<'a, C> SubcommandGroupBuilder<'a, C> {
    pub(crate) fn new(parent: &'a mut Command<C>) -> Self {
        Self {
            parent,
            attributes: NodeAttributes::default(),
        }
    }

    /// Sets the group name; defaults to the handler name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.attributes.name = Some(name.into());
        self
    }

    /// Sets the group description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.attributes.description = description.into();
        self
    }

    /// Adds a check evaluated before any subcommand of the group runs.
    #[must_use]
    pub fn check(mut self, check: SharedCheck<C>) -> Self {
        self.attributes.checks.push(check);
        self
    }

    /// Wraps a handler into a group and appends it to the parent.
    pub fn decorate(
        self,
        handler: impl CommandHandler<C> + 'static,
    ) -> &'a mut SubcommandGroup<C> {
        let Self { parent, attributes } = self;
        let lineage = parent.child_lineage();
        parent.attach_group(SubcommandGroup::new(Arc::new(handler), lineage, attributes))
    }
}
