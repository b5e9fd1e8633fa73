//! Interaction client: command registration and dispatch.

use mockable::Clock;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::interaction::config::InteractionConfig;
use crate::interaction::domain::{
    ApplicationCommandSchema, ArgumentError, ArgumentValue, Arguments, CommandDefinitionError,
    CommandKind, resolve_arguments,
};
use crate::interaction::nodes::{ApplicationCommand, CommandNode, RegisteredCommand};
use crate::interaction::ports::{
    CheckError, CommandRegistry, CommandRegistryError, HandlerError, SharedCog,
};

/// Errors raised while registering a command.
#[derive(Debug, Error)]
pub enum InteractionClientError {
    /// The command definition disagrees with its handler.
    #[error(transparent)]
    Definition(#[from] CommandDefinitionError),
    /// The registry rejected the command.
    #[error(transparent)]
    Registry(#[from] CommandRegistryError),
}

/// Result type for client registration operations.
pub type InteractionClientResult<T> = Result<T, InteractionClientError>;

/// Errors raised while dispatching an invocation.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No registered command matches the invocation.
    #[error("command '{0}' was not found")]
    UnknownCommand(String),
    /// A check denied the invocation.
    #[error("checks denied command '{0}'")]
    Forbidden(String),
    /// A check failed.
    #[error(transparent)]
    Check(#[from] CheckError),
    /// The invocation arguments are invalid.
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    /// The handler failed.
    #[error(transparent)]
    Handler(#[from] HandlerError),
    /// The registry could not be read.
    #[error(transparent)]
    Registry(#[from] CommandRegistryError),
}

/// Registers commands and routes invocations to their handlers.
pub struct InteractionClient<C, R, K>
where
    R: CommandRegistry<C>,
    K: Clock + Send + Sync,
{
    registry: Arc<R>,
    clock: Arc<K>,
    config: InteractionConfig,
    _context: PhantomData<fn(&C)>,
}

impl<C, R, K> InteractionClient<C, R, K>
where
    R: CommandRegistry<C>,
    K: Clock + Send + Sync,
{
    /// Creates a client over a registry.
    #[must_use]
    pub const fn new(registry: Arc<R>, clock: Arc<K>, config: InteractionConfig) -> Self {
        Self {
            registry,
            clock,
            config,
            _context: PhantomData,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Registers a command, optionally owned by a cog.
    ///
    /// Binds the cog to the whole command tree, reconciles every option
    /// list against its handler signature, and stores the result with its
    /// wire payload and fingerprint.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionClientError::Definition`] when the definition
    /// is invalid and [`InteractionClientError::Registry`] when a command of
    /// the same kind and name is already registered.
    pub fn add_interaction(
        &self,
        command: impl Into<ApplicationCommand<C>>,
        cog: Option<SharedCog>,
    ) -> InteractionClientResult<Arc<RegisteredCommand<C>>> {
        let mut bound = command.into();
        let cog_name = cog.as_ref().map(|owner| owner.name().to_owned());
        bound.bind(cog, self.config.untyped_parameters)?;

        let schema = bound.schema()?;
        let fingerprint = schema.fingerprint()?;
        let sync = bound.sync_command().unwrap_or(self.config.sync_commands);
        let registered = Arc::new(RegisteredCommand::new(
            bound,
            schema,
            fingerprint,
            sync,
            self.clock.as_ref(),
        ));
        self.registry.register(Arc::clone(&registered))?;

        info!(
            command = registered.name(),
            kind = %registered.kind(),
            cog = cog_name.as_deref(),
            sync,
            "registered application command"
        );
        Ok(registered)
    }

    /// Finds a registered command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError`] when the registry cannot be read.
    pub fn find(
        &self,
        kind: CommandKind,
        name: &str,
    ) -> Result<Option<Arc<RegisteredCommand<C>>>, CommandRegistryError> {
        self.registry.find(kind, name)
    }

    /// Lists registered commands in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError`] when the registry cannot be read.
    pub fn commands(&self) -> Result<Vec<Arc<RegisteredCommand<C>>>, CommandRegistryError> {
        self.registry.list()
    }

    /// Returns the payloads that must be pushed to the platform.
    ///
    /// `remote` maps each command's kind and name to the fingerprint
    /// currently registered on the platform, since one name may be used by
    /// several kinds. Commands opted out of syncing are skipped, as are
    /// commands whose fingerprint already matches.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError`] when the registry cannot be read.
    pub fn pending_sync(
        &self,
        remote: &BTreeMap<(CommandKind, String), String>,
    ) -> Result<Vec<ApplicationCommandSchema>, CommandRegistryError> {
        Ok(self
            .registry
            .list()?
            .into_iter()
            .filter(|registered| registered.sync())
            .filter(|registered| {
                let key = (registered.kind(), registered.name().to_owned());
                remote.get(&key).map(String::as_str) != Some(registered.fingerprint())
            })
            .map(|registered| registered.schema().clone())
            .collect())
    }
}

impl<C, R, K> InteractionClient<C, R, K>
where
    C: Sync,
    R: CommandRegistry<C>,
    K: Clock + Send + Sync,
{
    /// Dispatches a slash command invocation.
    ///
    /// `path` is the space-separated command path, for example
    /// `"tag admin purge"`. Checks run for every node from the root to the
    /// invoked leaf before the handler is called.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the path is unknown, a check denies
    /// or fails, the arguments are invalid, or the handler fails.
    pub async fn dispatch(
        &self,
        path: &str,
        context: &C,
        provided: &BTreeMap<String, ArgumentValue>,
    ) -> Result<(), DispatchError> {
        let segments: Vec<&str> = path.split_whitespace().collect();
        let Some((root_name, rest)) = segments.split_first() else {
            return Err(DispatchError::UnknownCommand(path.to_owned()));
        };
        let registered = self
            .registry
            .find(CommandKind::ChatInput, root_name)?
            .ok_or_else(|| DispatchError::UnknownCommand(path.to_owned()))?;
        let ApplicationCommand::Slash(command) = registered.command() else {
            return Err(DispatchError::UnknownCommand(path.to_owned()));
        };
        let route = command
            .route(rest)
            .ok_or_else(|| DispatchError::UnknownCommand(path.to_owned()))?;

        for node in &route.nodes {
            if !node.can_run(context).await? {
                warn!(
                    command = %route.qualified_name,
                    node = node.name(),
                    "checks denied invocation"
                );
                return Err(DispatchError::Forbidden(route.qualified_name.clone()));
            }
        }

        let arguments = resolve_arguments(
            &route.qualified_name,
            route.options.iter().copied(),
            provided,
        )?;
        let leaf = route
            .leaf()
            .ok_or_else(|| DispatchError::UnknownCommand(path.to_owned()))?;
        debug!(
            command = %route.qualified_name,
            arguments = arguments.len(),
            "dispatching application command"
        );
        leaf.callback(context, &arguments).await?;
        Ok(())
    }

    /// Dispatches a user or message context-menu invocation.
    ///
    /// The target snowflake is bound to the handler's first bindable
    /// parameter.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the command is unknown, a check denies
    /// or fails, or the handler fails.
    pub async fn dispatch_context_menu(
        &self,
        kind: CommandKind,
        name: &str,
        context: &C,
        target: u64,
    ) -> Result<(), DispatchError> {
        let registered = self
            .registry
            .find(kind, name)?
            .ok_or_else(|| DispatchError::UnknownCommand(name.to_owned()))?;
        let ApplicationCommand::ContextMenu(command) = registered.command() else {
            return Err(DispatchError::UnknownCommand(name.to_owned()));
        };

        if !command.can_run(context).await? {
            warn!(command = name, kind = %kind, "checks denied invocation");
            return Err(DispatchError::Forbidden(name.to_owned()));
        }

        let arguments =
            Arguments::new().with(command.target_parameter(), ArgumentValue::Snowflake(target));
        debug!(command = name, kind = %kind, target, "dispatching context-menu command");
        command.callback(context, &arguments).await?;
        Ok(())
    }
}
