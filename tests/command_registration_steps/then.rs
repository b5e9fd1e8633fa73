//! Then steps for command registration BDD scenarios.

use super::world::{CommandWorld, ObservedCall};
use interaction_commands::interaction::{
    domain::CommandDefinitionError,
    services::{DispatchError, InteractionClientError},
};
use rstest_bdd_macros::then;

fn call_for(world: &CommandWorld, handler: &str) -> Result<ObservedCall, eyre::Report> {
    world
        .calls()?
        .into_iter()
        .find(|call| call.handler == handler)
        .ok_or_else(|| eyre::eyre!("handler '{handler}' did not run"))
}

#[then(r#"the "{handler}" handler ran with receiver "{cog}""#)]
fn handler_ran_with_receiver(
    world: &CommandWorld,
    handler: String,
    cog: String,
) -> Result<(), eyre::Report> {
    let call = call_for(world, &handler)?;
    if call.receiver.as_deref() != Some(cog.as_str()) {
        return Err(eyre::eyre!(
            "expected receiver '{cog}', found {:?}",
            call.receiver
        ));
    }
    Ok(())
}

#[then(r#"the "{handler}" handler received name "{value}""#)]
fn handler_received_name(
    world: &CommandWorld,
    handler: String,
    value: String,
) -> Result<(), eyre::Report> {
    let call = call_for(world, &handler)?;
    if call.arguments.string("name") != Some(value.as_str()) {
        return Err(eyre::eyre!(
            "expected name '{value}', found {:?}",
            call.arguments.get("name")
        ));
    }
    Ok(())
}

#[then("the dispatch is forbidden")]
fn dispatch_is_forbidden(world: &CommandWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_dispatch
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing dispatch result in scenario world"))?;
    if !matches!(result, Err(DispatchError::Forbidden(_))) {
        return Err(eyre::eyre!("expected forbidden dispatch, got {result:?}"));
    }
    Ok(())
}

#[then("no handler ran")]
fn no_handler_ran(world: &CommandWorld) -> Result<(), eyre::Report> {
    let calls = world.calls()?;
    if !calls.is_empty() {
        return Err(eyre::eyre!("expected no calls, found {}", calls.len()));
    }
    Ok(())
}

#[then("registration fails with an option count mismatch")]
fn registration_fails_with_count_mismatch(world: &CommandWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_registration
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    if !matches!(
        result,
        Err(InteractionClientError::Definition(
            CommandDefinitionError::OptionCountMismatch { .. }
        ))
    ) {
        return Err(eyre::eyre!("expected option count mismatch, got {result:?}"));
    }
    Ok(())
}

#[then("{count:usize} commands are pending sync")]
fn commands_pending_sync(world: &CommandWorld, count: usize) -> Result<(), eyre::Report> {
    let pending = world
        .client
        .pending_sync(&world.remote)
        .map_err(|err| eyre::eyre!("pending_sync failed: {err}"))?;
    if pending.len() != count {
        return Err(eyre::eyre!(
            "expected {count} pending commands, found {}",
            pending.len()
        ));
    }
    Ok(())
}
