//! When steps for command registration BDD scenarios.

use std::collections::BTreeMap;

use super::world::{CommandWorld, ScenarioContext, run_async};
use interaction_commands::interaction::domain::ArgumentValue;
use rstest_bdd_macros::when;

#[when("the command is registered")]
fn register_command(world: &mut CommandWorld) -> Result<(), eyre::Report> {
    let pending = world
        .pending
        .take()
        .ok_or_else(|| eyre::eyre!("no pending command in scenario world"))?;
    world.last_registration = Some(world.client.add_interaction(pending, world.cog.clone()));
    Ok(())
}

#[when(r#""{user}" dispatches "{path}" with name "{value}""#)]
fn dispatch_with_name(world: &mut CommandWorld, user: String, path: String, value: String) {
    let provided = BTreeMap::from([("name".to_owned(), ArgumentValue::String(value))]);
    dispatch(world, user, &path, &provided);
}

#[when(r#""{user}" dispatches "{path}" without arguments"#)]
fn dispatch_without_arguments(world: &mut CommandWorld, user: String, path: String) {
    dispatch(world, user, &path, &BTreeMap::new());
}

#[when(r#"the platform already holds the current "{name}" payload"#)]
fn platform_holds_payload(world: &mut CommandWorld, name: String) -> Result<(), eyre::Report> {
    let registered = world
        .last_registration
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no registration in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("registration failed: {err}"))?;
    world
        .remote
        .insert((registered.kind(), name), registered.fingerprint().to_owned());
    Ok(())
}

fn dispatch(
    world: &mut CommandWorld,
    user: String,
    path: &str,
    provided: &BTreeMap<String, ArgumentValue>,
) {
    world.context = ScenarioContext {
        user,
        ..ScenarioContext::default()
    };
    world.last_dispatch = Some(run_async(world.client.dispatch(
        path,
        &world.context,
        provided,
    )));
}
