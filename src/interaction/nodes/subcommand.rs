//! Leaf subcommands.

use std::fmt;

use super::base::{CommandNode, HasOptions, HasParent, Lineage, NodeAttributes, NodeCore};
use crate::interaction::domain::{
    CommandDefinitionError, CommandKind, CommandOption, OptionSchema, UntypedParameterPolicy,
    reconcile_signature_options,
};
use crate::interaction::ports::{SharedCog, SharedHandler};

/// Subcommand beneath a slash command or a subcommand group.
pub struct Subcommand<C> {
    core: NodeCore<C>,
    lineage: Lineage,
    base_options: Vec<CommandOption>,
    options: Vec<CommandOption>,
}

impl<C> Subcommand<C> {
    pub(crate) fn new(
        handler: SharedHandler<C>,
        lineage: Lineage,
        attributes: NodeAttributes<C>,
    ) -> Self {
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
            lineage,
            options: base_options.clone(),
            base_options,
        }
    }

    /// Returns the bound options.
    #[must_use]
    pub fn options(&self) -> &[CommandOption] {
        &self.options
    }

    pub(crate) fn assign_cog(&mut self, cog: Option<SharedCog>) {
        self.core.assign_cog(cog);
    }

    /// Derives the option list from the handler signature.
    ///
    /// The skip count follows the cog propagated from the root command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError`] when the declared options disagree
    /// with the handler signature.
    pub fn set_signature_option(
        &mut self,
        policy: UntypedParameterPolicy,
    ) -> Result<(), CommandDefinitionError> {
        self.options = reconcile_signature_options(
            &self.qualified_name(),
            self.core.signature(),
            &self.base_options,
            self.core.skip(),
            policy,
        )?;
        Ok(())
    }

    /// Builds the wire payload for this subcommand.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError::UnresolvedOption`] when signature
    /// binding has not resolved every option.
    pub fn schema(&self) -> Result<OptionSchema, CommandDefinitionError> {
        let qualified = self.qualified_name();
        let options = self
            .options
            .iter()
            .enumerate()
            .map(|(position, option)| OptionSchema::from_option(&qualified, position, option))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(OptionSchema::node(
            CommandKind::Subcommand,
            self.core.name(),
            self.core.description(),
            options,
        ))
    }
}

impl<C> CommandNode<C> for Subcommand<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn kind(&self) -> CommandKind {
        CommandKind::Subcommand
    }
}

impl<C> HasOptions for Subcommand<C> {
    fn base_options(&self) -> &[CommandOption] {
        &self.base_options
    }

    fn resolved_options(&self) -> Vec<&CommandOption> {
        self.options.iter().collect()
    }
}

impl<C> HasParent for Subcommand<C> {
    fn lineage(&self) -> &Lineage {
        &self.lineage
    }

    fn node_name(&self) -> &str {
        self.core.name()
    }
}

impl<C> fmt::Debug for Subcommand<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subcommand")
            .field("core", &self.core)
            .field("lineage", &self.lineage)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
