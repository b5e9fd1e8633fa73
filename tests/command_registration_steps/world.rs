//! Shared world state for command registration BDD scenarios.

use std::collections::BTreeMap;
use std::future::{Ready, ready};
use std::sync::{Arc, Mutex};

use interaction_commands::interaction::{
    adapters::memory::InMemoryCommandRegistry,
    config::InteractionConfig,
    domain::{Arguments, CommandKind, HandlerSignature},
    nodes::{ApplicationCommand, RegisteredCommand},
    ports::{Cog, HandlerFn, HandlerResult, OwnedInvocation, SharedCog},
    services::{DispatchError, InteractionClient, InteractionClientError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Client type used by the BDD world.
pub type TestClient =
    InteractionClient<ScenarioContext, InMemoryCommandRegistry<ScenarioContext>, DefaultClock>;

/// Handler invocation observed during a scenario.
#[derive(Debug, Clone)]
pub struct ObservedCall {
    /// Name of the handler that ran.
    pub handler: String,
    /// Name of the injected cog, if any.
    pub receiver: Option<String>,
    /// Resolved arguments.
    pub arguments: Arguments,
}

/// Invocation context passed to scenario handlers.
#[derive(Debug, Clone, Default)]
pub struct ScenarioContext {
    /// Invoking user.
    pub user: String,
    /// Calls recorded by handlers.
    pub calls: Arc<Mutex<Vec<ObservedCall>>>,
}

/// Cog owning the scenario commands.
pub struct NamedCog(pub String);

impl Cog for NamedCog {
    fn name(&self) -> &str {
        &self.0
    }
}

/// Scenario world for command registration behaviour tests.
pub struct CommandWorld {
    /// The client under test.
    pub client: TestClient,
    /// Command awaiting registration.
    pub pending: Option<ApplicationCommand<ScenarioContext>>,
    /// Cog the pending command is registered with.
    pub cog: Option<SharedCog>,
    /// Result of the last registration attempt.
    pub last_registration:
        Option<Result<Arc<RegisteredCommand<ScenarioContext>>, InteractionClientError>>,
    /// Context of the last dispatch.
    pub context: ScenarioContext,
    /// Result of the last dispatch.
    pub last_dispatch: Option<Result<(), DispatchError>>,
    /// Fingerprints held by the platform, keyed by kind and name.
    pub remote: BTreeMap<(CommandKind, String), String>,
}

impl CommandWorld {
    /// Creates a world with a default-configured client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: InteractionClient::new(
                Arc::new(InMemoryCommandRegistry::new()),
                Arc::new(DefaultClock),
                InteractionConfig::default(),
            ),
            pending: None,
            cog: None,
            last_registration: None,
            context: ScenarioContext::default(),
            last_dispatch: None,
            remote: BTreeMap::new(),
        }
    }

    /// Returns the calls recorded by the last dispatch.
    pub fn calls(&self) -> Result<Vec<ObservedCall>, eyre::Report> {
        self.context
            .calls
            .lock()
            .map(|calls| calls.clone())
            .map_err(|err| eyre::eyre!("call log poisoned: {err}"))
    }
}

impl Default for CommandWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CommandWorld {
    CommandWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds a handler that records its invocations.
pub fn recorder(
    name: &'static str,
    signature: HandlerSignature,
) -> HandlerFn<
    ScenarioContext,
    impl Fn(OwnedInvocation<ScenarioContext>) -> Ready<HandlerResult> + Send + Sync + 'static,
> {
    HandlerFn::new(name, signature, move |invocation: OwnedInvocation<ScenarioContext>| {
        let call = ObservedCall {
            handler: name.to_owned(),
            receiver: invocation.receiver.as_ref().map(|cog| cog.name().to_owned()),
            arguments: invocation.arguments,
        };
        if let Ok(mut calls) = invocation.context.calls.lock() {
            calls.push(call);
        }
        ready(Ok(()))
    })
}
