//! Subcommand groups.

use std::collections::BTreeMap;
use std::fmt;

use super::base::{CommandNode, HasParent, Lineage, NodeAttributes, NodeCore, place_child};
use super::subcommand::Subcommand;
use crate::interaction::decorators::{SubcommandBuilder, SubcommandParent};
use crate::interaction::domain::{
    CommandDefinitionError, CommandKind, OptionSchema, UntypedParameterPolicy,
};
use crate::interaction::ports::{SharedCog, SharedHandler};

/// Group of subcommands directly beneath a slash command.
///
/// Groups only hold subcommands; they cannot nest further groups.
///
/// ```compile_fail
/// use interaction_commands::interaction::nodes::SubcommandGroup;
///
/// fn nest(group: &mut SubcommandGroup<()>) {
///     let _ = group.subcommand_group();
/// }
/// ```
pub struct SubcommandGroup<C> {
    core: NodeCore<C>,
    lineage: Lineage,
    subcommands: BTreeMap<usize, Subcommand<C>>,
}

impl<C> SubcommandGroup<C> {
    pub(crate) fn new(
        handler: SharedHandler<C>,
        lineage: Lineage,
        attributes: NodeAttributes<C>,
    ) -> Self {
        Self {
            core: NodeCore::new(
                handler,
                attributes.name,
                attributes.description,
                attributes.checks,
            ),
            lineage,
            subcommands: BTreeMap::new(),
        }
    }

    /// Starts declaring a subcommand inside this group.
    pub fn subcommand(&mut self) -> SubcommandBuilder<'_, C> {
        SubcommandBuilder::new(SubcommandParent::Group(self))
    }

    /// Returns the subcommands in declaration order.
    #[must_use]
    pub fn options(&self) -> Vec<&Subcommand<C>> {
        self.subcommands.values().collect()
    }

    /// Finds a subcommand by name.
    #[must_use]
    pub fn find_subcommand(&self, name: &str) -> Option<&Subcommand<C>> {
        self.subcommands
            .values()
            .find(|subcommand| subcommand.name() == name)
    }

    pub(crate) fn attach(&mut self, subcommand: Subcommand<C>) -> &mut Subcommand<C> {
        let position = self.subcommands.len();
        place_child(&mut self.subcommands, position, subcommand)
    }

    pub(crate) fn child_lineage(&self) -> Lineage {
        self.lineage.extend(self.core.name())
    }

    pub(crate) fn assign_cog(&mut self, cog: Option<SharedCog>) {
        for subcommand in self.subcommands.values_mut() {
            subcommand.assign_cog(cog.clone());
        }
        self.core.assign_cog(cog);
    }

    /// Binds every subcommand's option list.
    ///
    /// # Errors
    ///
    /// Returns the first [`CommandDefinitionError`] raised by a subcommand.
    pub fn set_signature_option(
        &mut self,
        policy: UntypedParameterPolicy,
    ) -> Result<(), CommandDefinitionError> {
        for subcommand in self.subcommands.values_mut() {
            subcommand.set_signature_option(policy)?;
        }
        Ok(())
    }

    /// Builds the wire payload for this group.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError`] when a subcommand schema fails.
    pub fn schema(&self) -> Result<OptionSchema, CommandDefinitionError> {
        let options = self
            .subcommands
            .values()
            .map(Subcommand::schema)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(OptionSchema::node(
            CommandKind::SubcommandGroup,
            self.core.name(),
            self.core.description(),
            options,
        ))
    }
}

impl<C> CommandNode<C> for SubcommandGroup<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn kind(&self) -> CommandKind {
        CommandKind::SubcommandGroup
    }
}

impl<C> HasParent for SubcommandGroup<C> {
    fn lineage(&self) -> &Lineage {
        &self.lineage
    }

    fn node_name(&self) -> &str {
        self.core.name()
    }
}

impl<C> fmt::Debug for SubcommandGroup<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubcommandGroup")
            .field("core", &self.core)
            .field("lineage", &self.lineage)
            .field("subcommands", &self.subcommands)
            .finish()
    }
}
