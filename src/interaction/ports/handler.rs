//! Command handler and grouping ports.

use async_trait::async_trait;
use std::any::Any;
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;

use super::check::SharedCheck;
use crate::interaction::domain::{Arguments, CommandOption, HandlerSignature};

/// Result type for handler execution.
pub type HandlerResult = Result<(), HandlerError>;

/// Shared, type-erased command handler.
pub type SharedHandler<C> = Arc<dyn CommandHandler<C>>;

/// Shared grouping object.
pub type SharedCog = Arc<dyn Cog>;

/// Grouping object that owns a set of command handlers.
///
/// When a command is registered with a cog, its handlers receive the cog as
/// an extra leading receiver argument.
pub trait Cog: Any + Send + Sync {
    /// Returns the cog's display name.
    fn name(&self) -> &str;
}

impl dyn Cog {
    /// Returns the concrete cog when it is of type `T`.
    #[must_use]
    pub fn downcast_ref<T: Cog>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

impl fmt::Debug for dyn Cog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cog").field("name", &self.name()).finish()
    }
}

/// Arguments passed to a handler on invocation.
pub struct Invocation<'a, C> {
    /// Owning cog, injected when the command is cog-bound.
    pub receiver: Option<&'a SharedCog>,
    /// Invocation context.
    pub context: &'a C,
    /// Resolved option values keyed by parameter name.
    pub arguments: &'a Arguments,
}

impl<C: Clone> Invocation<'_, C> {
    /// Clones the borrowed parts into an owned invocation.
    #[must_use]
    pub fn into_owned(self) -> OwnedInvocation<C> {
        OwnedInvocation {
            receiver: self.receiver.cloned(),
            context: self.context.clone(),
            arguments: self.arguments.clone(),
        }
    }
}

/// Owned form of [`Invocation`] handed to closure handlers.
pub struct OwnedInvocation<C> {
    /// Owning cog, injected when the command is cog-bound.
    pub receiver: Option<SharedCog>,
    /// Invocation context.
    pub context: C,
    /// Resolved option values keyed by parameter name.
    pub arguments: Arguments,
}

/// Errors raised by command handlers.
#[derive(Debug, Clone, Error)]
pub enum HandlerError {
    /// The handler failed with a message.
    #[error("handler failed: {0}")]
    Failed(String),

    /// The handler failed with an underlying error.
    #[error("handler runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl HandlerError {
    /// Creates a failure with a message.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    /// Wraps an underlying error.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}

/// Callable wrapped by a command node.
///
/// Besides execution, a handler describes its own parameter list and may
/// carry checks and options attached to it independently of the command
/// decorator. Attached items are reported in attachment order.
#[async_trait]
pub trait CommandHandler<C>: Send + Sync {
    /// Handler identifier, used as the default command name.
    fn name(&self) -> &str;

    /// Declared parameter list, including implicit leading parameters.
    fn signature(&self) -> &HandlerSignature;

    /// Checks attached directly to the handler.
    fn attached_checks(&self) -> Vec<SharedCheck<C>> {
        Vec::new()
    }

    /// Options attached directly to the handler.
    fn attached_options(&self) -> Vec<CommandOption> {
        Vec::new()
    }

    /// Executes the handler.
    async fn call(&self, invocation: Invocation<'_, C>) -> HandlerResult;
}

/// Handler backed by an async closure.
pub struct HandlerFn<C, F> {
    name: String,
    signature: HandlerSignature,
    checks: Vec<SharedCheck<C>>,
    options: Vec<CommandOption>,
    func: F,
    _context: PhantomData<fn(C)>,
}

impl<C, F> HandlerFn<C, F> {
    /// Creates a closure handler.
    pub fn new(name: impl Into<String>, signature: HandlerSignature, func: F) -> Self {
        Self {
            name: name.into(),
            signature,
            checks: Vec::new(),
            options: Vec::new(),
            func,
            _context: PhantomData,
        }
    }

    /// Attaches a check to the handler.
    ///
    /// Attach checks innermost first, the order stacked decorators run in.
    #[must_use]
    pub fn with_check(mut self, check: SharedCheck<C>) -> Self {
        self.checks.push(check);
        self
    }

    /// Attaches an option to the handler, innermost first.
    #[must_use]
    pub fn with_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }
}

#[async_trait]
impl<C, F, Fut> CommandHandler<C> for HandlerFn<C, F>
where
    C: Clone + Send + Sync + 'static,
    F: Fn(OwnedInvocation<C>) -> Fut + Send + Sync,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> &HandlerSignature {
        &self.signature
    }

    fn attached_checks(&self) -> Vec<SharedCheck<C>> {
        self.checks.clone()
    }

    fn attached_options(&self) -> Vec<CommandOption> {
        self.options.clone()
    }

    async fn call(&self, invocation: Invocation<'_, C>) -> HandlerResult {
        (self.func)(invocation.into_owned()).await
    }
}
