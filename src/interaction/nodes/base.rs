//! State and behaviour shared by every command node.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::future::Future;

use crate::interaction::domain::{
    Arguments, CommandKind, CommandOption, DEFAULT_DESCRIPTION, HandlerSignature, skip_count,
};
use crate::interaction::ports::{
    CheckResult, HandlerResult, Invocation, SharedCheck, SharedCog, SharedHandler, run_checks,
};

/// Declarative attributes collected by the decorator builders.
pub(crate) struct NodeAttributes<C> {
    pub(crate) name: Option<String>,
    pub(crate) description: String,
    pub(crate) checks: Vec<SharedCheck<C>>,
    pub(crate) options: Vec<CommandOption>,
    pub(crate) sync_command: Option<bool>,
}

impl<C> Default for NodeAttributes<C> {
    fn default() -> Self {
        Self {
            name: None,
            description: DEFAULT_DESCRIPTION.to_owned(),
            checks: Vec::new(),
            options: Vec::new(),
            sync_command: None,
        }
    }
}

/// Stores a child node at its declaration position and lends it back.
pub(crate) fn place_child<T>(
    slots: &mut BTreeMap<usize, T>,
    position: usize,
    child: T,
) -> &mut T {
    match slots.entry(position) {
        Entry::Vacant(slot) => slot.insert(child),
        Entry::Occupied(slot) => {
            let existing = slot.into_mut();
            *existing = child;
            existing
        }
    }
}

/// Handler, checks, and cog binding of one node.
pub struct NodeCore<C> {
    handler: SharedHandler<C>,
    name: String,
    description: String,
    checks: Vec<SharedCheck<C>>,
    cog: Option<SharedCog>,
}

impl<C> NodeCore<C> {
    /// Wraps a handler.
    ///
    /// The name defaults to the handler's own. Checks attached to the
    /// handler follow the explicit ones, innermost attachment first.
    pub(crate) fn new(
        handler: SharedHandler<C>,
        name: Option<String>,
        description: String,
        checks: Vec<SharedCheck<C>>,
    ) -> Self {
        let resolved_name = name.unwrap_or_else(|| handler.name().to_owned());
        let mut merged = checks;
        merged.extend(handler.attached_checks().into_iter().rev());
        Self {
            handler,
            name: resolved_name,
            description,
            checks: merged,
            cog: None,
        }
    }

    /// Returns the node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the node description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the checks in evaluation order.
    #[must_use]
    pub fn checks(&self) -> &[SharedCheck<C>] {
        &self.checks
    }

    /// Returns the owning cog, if bound to one.
    #[must_use]
    pub const fn cog(&self) -> Option<&SharedCog> {
        self.cog.as_ref()
    }

    /// Returns the wrapped handler's signature.
    #[must_use]
    pub fn signature(&self) -> &HandlerSignature {
        self.handler.signature()
    }

    /// Returns the number of implicit leading handler parameters.
    #[must_use]
    pub const fn skip(&self) -> usize {
        skip_count(self.cog.is_some())
    }

    pub(crate) fn handler(&self) -> &SharedHandler<C> {
        &self.handler
    }

    pub(crate) fn assign_cog(&mut self, cog: Option<SharedCog>) {
        self.cog = cog;
    }

    /// Evaluates the node's checks against a context.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::interaction::ports::CheckError`] raised.
    pub async fn can_run(&self, context: &C) -> CheckResult {
        run_checks(&self.checks, context).await
    }

    /// Invokes the handler, injecting the cog as receiver when bound.
    ///
    /// # Errors
    ///
    /// Returns the handler's [`crate::interaction::ports::HandlerError`].
    pub async fn callback(&self, context: &C, arguments: &Arguments) -> HandlerResult {
        self.handler
            .call(Invocation {
                receiver: self.cog.as_ref(),
                context,
                arguments,
            })
            .await
    }
}

impl<C> fmt::Debug for NodeCore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeCore")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("checks", &self.checks.len())
            .field("cog", &self.cog.as_ref().map(|cog| cog.name().to_owned()))
            .finish_non_exhaustive()
    }
}

/// Behaviour common to every node kind.
pub trait CommandNode<C> {
    /// Returns the shared node state.
    fn core(&self) -> &NodeCore<C>;

    /// Returns the node's kind tag.
    fn kind(&self) -> CommandKind;

    /// Returns the node name.
    fn name<'a>(&'a self) -> &'a str
    where
        C: 'a,
    {
        self.core().name()
    }

    /// Evaluates the node's checks against a context.
    fn can_run<'a>(&'a self, context: &'a C) -> impl Future<Output = CheckResult> + 'a
    where
        C: 'a,
    {
        self.core().can_run(context)
    }

    /// Invokes the node's handler.
    fn callback<'a>(
        &'a self,
        context: &'a C,
        arguments: &'a Arguments,
    ) -> impl Future<Output = HandlerResult> + 'a
    where
        C: 'a,
    {
        self.core().callback(context, arguments)
    }
}

/// Nodes that carry their own option list.
pub trait HasOptions {
    /// Options supplied at definition time.
    fn base_options(&self) -> &[CommandOption];

    /// Options after signature binding.
    fn resolved_options(&self) -> Vec<&CommandOption>;
}

/// Position of a tree-form node below its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineage {
    ancestors: Vec<String>,
}

impl Lineage {
    pub(crate) fn under(root: &str) -> Self {
        Self {
            ancestors: vec![root.to_owned()],
        }
    }

    pub(crate) fn extend(&self, parent: &str) -> Self {
        let mut ancestors = self.ancestors.clone();
        ancestors.push(parent.to_owned());
        Self { ancestors }
    }

    /// Returns the name of the immediate parent.
    #[must_use]
    pub fn parent(&self) -> &str {
        self.ancestors.last().map_or("", String::as_str)
    }

    /// Returns the name of the root command.
    #[must_use]
    pub fn top_parent(&self) -> &str {
        self.ancestors.first().map_or("", String::as_str)
    }

    /// Returns the ancestor names from the root down.
    #[must_use]
    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }
}

/// Tree-form nodes that know their parent and root.
pub trait HasParent {
    /// Returns the node's lineage.
    fn lineage(&self) -> &Lineage;

    /// Returns the node name.
    fn node_name(&self) -> &str;

    /// Returns the immediate parent's name.
    fn parent_name(&self) -> &str {
        self.lineage().parent()
    }

    /// Returns the root command's name.
    fn top_parent_name(&self) -> &str {
        self.lineage().top_parent()
    }

    /// Returns the space-separated path from the root to this node.
    fn qualified_name(&self) -> String {
        let mut segments: Vec<&str> = self
            .lineage()
            .ancestors()
            .iter()
            .map(String::as_str)
            .collect();
        segments.push(self.node_name());
        segments.join(" ")
    }
}
