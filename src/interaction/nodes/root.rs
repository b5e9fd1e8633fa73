//! Top-level slash commands.

use std::collections::BTreeMap;
use std::fmt;

use super::base::{CommandNode, HasOptions, Lineage, NodeAttributes, NodeCore, place_child};
use super::group::SubcommandGroup;
use super::subcommand::Subcommand;
use crate::interaction::decorators::{
    SubcommandBuilder, SubcommandGroupBuilder, SubcommandParent,
};
use crate::interaction::domain::{
    ApplicationCommandSchema, CommandDefinitionError, CommandKind, CommandOption, OptionSchema,
    UntypedParameterPolicy, reconcile_signature_options,
};
use crate::interaction::ports::{SharedCog, SharedHandler};

/// Entry in a slash command's option list.
pub enum CommandEntry<'a, C> {
    /// Plain option bound to a handler parameter.
    Option(&'a CommandOption),
    /// Direct subcommand.
    Subcommand(&'a Subcommand<C>),
    /// Subcommand group.
    Group(&'a SubcommandGroup<C>),
}

impl<C> fmt::Debug for CommandEntry<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Option(option) => f.debug_tuple("Option").field(option).finish(),
            Self::Subcommand(subcommand) => f.debug_tuple("Subcommand").field(subcommand).finish(),
            Self::Group(group) => f.debug_tuple("Group").field(group).finish(),
        }
    }
}

/// Nodes visited when dispatching a slash command path, root first.
pub struct Route<'a, C> {
    /// Every node from the root to the invoked leaf.
    pub nodes: Vec<&'a NodeCore<C>>,
    /// The leaf's bound options.
    pub options: Vec<&'a CommandOption>,
    /// Space-separated path of the leaf.
    pub qualified_name: String,
}

impl<C> Route<'_, C> {
    /// Returns the invoked leaf node.
    #[must_use]
    pub fn leaf(&self) -> Option<&NodeCore<C>> {
        self.nodes.last().copied()
    }
}

/// Top-level slash command, the root of a command tree.
///
/// Subcommands and groups are keyed by one shared declaration position so
/// the wire payload lists them in the order they were written.
pub struct Command<C> {
    core: NodeCore<C>,
    base_options: Vec<CommandOption>,
    plain: Vec<CommandOption>,
    subcommands: BTreeMap<usize, Subcommand<C>>,
    groups: BTreeMap<usize, SubcommandGroup<C>>,
    sync_command: Option<bool>,
}

impl<C> Command<C> {
    pub(crate) fn new(handler: SharedHandler<C>, attributes: NodeAttributes<C>) -> Self {
        let mut base_options = attributes.options;
        base_options.extend(handler.attached_options().into_iter().rev());
        let core = NodeCore::new(
            handler,
            attributes.name,
            attributes.description,
            attributes.checks,
        );
        Self {
            core,
            plain: base_options.clone(),
            base_options,
            subcommands: BTreeMap::new(),
            groups: BTreeMap::new(),
            sync_command: attributes.sync_command,
        }
    }

    /// Starts declaring a direct subcommand.
    pub fn subcommand(&mut self) -> SubcommandBuilder<'_, C> {
        SubcommandBuilder::new(SubcommandParent::Root(self))
    }

    /// Starts declaring a subcommand group.
    pub fn subcommand_group(&mut self) -> SubcommandGroupBuilder<'_, C> {
        SubcommandGroupBuilder::new(self)
    }

    /// Returns the option list: plain options, then child nodes in
    /// declaration order.
    #[must_use]
    pub fn options(&self) -> Vec<CommandEntry<'_, C>> {
        let mut nodes: Vec<(usize, CommandEntry<'_, C>)> = self
            .subcommands
            .iter()
            .map(|(position, subcommand)| (*position, CommandEntry::Subcommand(subcommand)))
            .chain(
                self.groups
                    .iter()
                    .map(|(position, group)| (*position, CommandEntry::Group(group))),
            )
            .collect();
        nodes.sort_by_key(|(position, _)| *position);
        self.plain
            .iter()
            .map(CommandEntry::Option)
            .chain(nodes.into_iter().map(|(_, entry)| entry))
            .collect()
    }

    /// Returns the registration hint, if one was given.
    #[must_use]
    pub const fn sync_command(&self) -> Option<bool> {
        self.sync_command
    }

    /// Returns `true` when the command holds subcommands or groups.
    #[must_use]
    pub fn is_subcommand(&self) -> bool {
        !self.subcommands.is_empty() || !self.groups.is_empty()
    }

    pub(crate) fn child_lineage(&self) -> Lineage {
        Lineage::under(self.core.name())
    }

    fn next_position(&self) -> usize {
        self.subcommands.len() + self.groups.len()
    }

    pub(crate) fn attach_subcommand(&mut self, subcommand: Subcommand<C>) -> &mut Subcommand<C> {
        let position = self.next_position();
        place_child(&mut self.subcommands, position, subcommand)
    }

    pub(crate) fn attach_group(&mut self, group: SubcommandGroup<C>) -> &mut SubcommandGroup<C> {
        let position = self.next_position();
        place_child(&mut self.groups, position, group)
    }

    pub(crate) fn assign_cog(&mut self, cog: Option<SharedCog>) {
        for subcommand in self.subcommands.values_mut() {
            subcommand.assign_cog(cog.clone());
        }
        for group in self.groups.values_mut() {
            group.assign_cog(cog.clone());
        }
        self.core.assign_cog(cog);
    }

    /// Binds the option list of this command or of every descendant.
    ///
    /// Commands with subcommands delegate to them; otherwise the explicit
    /// options are reconciled against the handler signature.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError::MixedOptionKinds`] when plain
    /// options sit next to subcommands, or any reconciliation failure.
    pub fn set_signature_option(
        &mut self,
        policy: UntypedParameterPolicy,
    ) -> Result<(), CommandDefinitionError> {
        if !self.is_subcommand() {
            self.plain = reconcile_signature_options(
                self.core.name(),
                self.core.signature(),
                &self.base_options,
                self.core.skip(),
                policy,
            )?;
            return Ok(());
        }

        if !self.plain.is_empty() {
            return Err(CommandDefinitionError::MixedOptionKinds(
                self.core.name().to_owned(),
            ));
        }
        for subcommand in self.subcommands.values_mut() {
            subcommand.set_signature_option(policy)?;
        }
        for group in self.groups.values_mut() {
            group.set_signature_option(policy)?;
        }
        Ok(())
    }

    /// Builds the wire payload for this command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError::UnresolvedOption`] when signature
    /// binding has not resolved every option.
    pub fn schema(&self) -> Result<ApplicationCommandSchema, CommandDefinitionError> {
        let name = self.core.name();
        let options = self
            .options()
            .into_iter()
            .enumerate()
            .map(|(position, entry)| match entry {
                CommandEntry::Option(option) => OptionSchema::from_option(name, position, option),
                CommandEntry::Subcommand(subcommand) => subcommand.schema(),
                CommandEntry::Group(group) => group.schema(),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ApplicationCommandSchema {
            name: name.to_owned(),
            kind: CommandKind::ChatInput.wire_value(),
            description: self.core.description().to_owned(),
            options,
        })
    }

    /// Resolves the nodes addressed by a path below this command.
    ///
    /// An empty path addresses the command itself, one segment a direct
    /// subcommand, and two segments a subcommand inside a group.
    #[must_use]
    pub fn route(&self, path: &[&str]) -> Option<Route<'_, C>> {
        match path {
            [] if !self.is_subcommand() => Some(Route {
                nodes: vec![&self.core],
                options: self.resolved_options(),
                qualified_name: self.core.name().to_owned(),
            }),
            [child] => self
                .subcommands
                .values()
                .find(|subcommand| subcommand.name() == *child)
                .map(|subcommand| Route {
                    nodes: vec![&self.core, subcommand.core()],
                    options: subcommand.resolved_options(),
                    qualified_name: format!("{} {child}", self.core.name()),
                }),
            [group_name, child] => self
                .groups
                .values()
                .find(|group| group.name() == *group_name)
                .and_then(|group| {
                    group.find_subcommand(child).map(|subcommand| Route {
                        nodes: vec![&self.core, group.core(), subcommand.core()],
                        options: subcommand.resolved_options(),
                        qualified_name: format!("{} {group_name} {child}", self.core.name()),
                    })
                }),
            _ => None,
        }
    }
}

impl<C> CommandNode<C> for Command<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn kind(&self) -> CommandKind {
        CommandKind::ChatInput
    }
}

impl<C> HasOptions for Command<C> {
    fn base_options(&self) -> &[CommandOption] {
        &self.base_options
    }

    fn resolved_options(&self) -> Vec<&CommandOption> {
        self.plain.iter().collect()
    }
}

impl<C> fmt::Debug for Command<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("core", &self.core)
            .field("options", &self.plain)
            .field("subcommands", &self.subcommands)
            .field("groups", &self.groups)
            .field("sync_command", &self.sync_command)
            .finish_non_exhaustive()
    }
}
