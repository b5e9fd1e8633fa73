//! Unit tests for command registration and dispatch.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

use super::fixtures::{
    TagCog, TestContext, bare_signature, cog_signature, receiver_signature, recording_handler,
    tag_signature,
};
use crate::interaction::adapters::memory::InMemoryCommandRegistry;
use crate::interaction::config::InteractionConfig;
use crate::interaction::decorators::{command, user};
use crate::interaction::domain::{
    ArgumentError, ArgumentValue, CommandDefinitionError, CommandKind, HandlerSignature,
    OptionType, Parameter,
};
use crate::interaction::nodes::Command;
use crate::interaction::ports::{CommandRegistryError, SharedCog, predicate};
use crate::interaction::services::{DispatchError, InteractionClient, InteractionClientError};

type TestClient =
    InteractionClient<TestContext, InMemoryCommandRegistry<TestContext>, DefaultClock>;

fn client_with(config: InteractionConfig) -> TestClient {
    InteractionClient::new(
        Arc::new(InMemoryCommandRegistry::new()),
        Arc::new(DefaultClock),
        config,
    )
}

#[fixture]
fn client() -> TestClient {
    client_with(InteractionConfig::default())
}

fn tag_tree() -> Command<TestContext> {
    let mut tag = command()
        .description("Manage tags")
        .decorate(recording_handler("tag", receiver_signature()));
    tag.subcommand()
        .name("add")
        .decorate(recording_handler("add", cog_signature()));
    tag.subcommand_group()
        .name("admin")
        .check(predicate(|ctx: &TestContext| ctx.user == "ada"))
        .decorate(recording_handler("admin", receiver_signature()))
        .subcommand()
        .name("purge")
        .decorate(recording_handler("purge", receiver_signature()));
    tag
}

fn tag_cog() -> SharedCog {
    Arc::new(TagCog)
}

fn raw(values: &[(&str, ArgumentValue)]) -> BTreeMap<String, ArgumentValue> {
    values
        .iter()
        .map(|(name, value)| ((*name).to_owned(), value.clone()))
        .collect()
}

#[rstest]
fn registration_stores_schema_fingerprint_and_sync(client: TestClient) {
    let before = Utc::now();

    let registered = client
        .add_interaction(tag_tree(), Some(tag_cog()))
        .expect("registration should succeed");

    assert_eq!(registered.name(), "tag");
    assert_eq!(registered.kind(), CommandKind::ChatInput);
    assert!(registered.sync());
    assert!(registered.registered_at() >= before);
    let expected = registered
        .schema()
        .fingerprint()
        .expect("fingerprint should build");
    assert_eq!(registered.fingerprint(), expected);
    let found = client
        .find(CommandKind::ChatInput, "tag")
        .expect("lookup should succeed")
        .expect("command should be registered");
    assert_eq!(found.id(), registered.id());
}

#[rstest]
fn duplicate_registration_is_rejected(client: TestClient) {
    client
        .add_interaction(tag_tree(), Some(tag_cog()))
        .expect("first registration should succeed");

    let result = client.add_interaction(tag_tree(), Some(tag_cog()));

    assert!(matches!(
        result,
        Err(InteractionClientError::Registry(CommandRegistryError::Duplicate {
            kind: CommandKind::ChatInput,
            ref name,
        })) if name == "tag"
    ));
}

#[rstest]
fn same_name_may_be_reused_across_kinds(client: TestClient) {
    client
        .add_interaction(command().decorate(recording_handler("inspect", bare_signature())), None)
        .expect("slash registration should succeed");

    let menu = client.add_interaction(
        user().decorate(recording_handler("inspect", bare_signature())),
        None,
    );

    assert!(menu.is_ok());
    let kinds: Vec<CommandKind> = client
        .commands()
        .expect("listing should succeed")
        .iter()
        .map(|registered| registered.kind())
        .collect();
    assert_eq!(kinds, vec![CommandKind::ChatInput, CommandKind::User]);
}

#[rstest]
fn strict_configuration_rejects_untyped_parameters() {
    let strict = client_with(InteractionConfig::strict());
    let signature = HandlerSignature::new()
        .context()
        .parameter(Parameter::untyped("anything"));

    let result = strict.add_interaction(command().decorate(recording_handler("echo", signature)), None);

    assert!(matches!(
        result,
        Err(InteractionClientError::Definition(
            CommandDefinitionError::UntypedParameter { .. }
        ))
    ));
    assert!(strict.commands().expect("listing should succeed").is_empty());
}

#[rstest]
#[case::default_config(InteractionConfig::default(), None, true)]
#[case::config_opt_out(InteractionConfig::default().with_sync_commands(false), None, false)]
#[case::hint_overrides_config(InteractionConfig::strict(), Some(true), true)]
#[case::hint_opts_out(InteractionConfig::default(), Some(false), false)]
fn sync_hint_falls_back_to_configuration(
    #[case] config: InteractionConfig,
    #[case] hint: Option<bool>,
    #[case] expected: bool,
) {
    let configured = client_with(config);
    let base = command();
    let builder = match hint {
        Some(sync) => base.sync_command(sync),
        None => base,
    };

    let registered = configured
        .add_interaction(builder.decorate(recording_handler("ping", bare_signature())), None)
        .expect("registration should succeed");

    assert_eq!(registered.sync(), expected);
}

#[rstest]
fn pending_sync_skips_matching_and_opted_out_commands(client: TestClient) {
    let tag = client
        .add_interaction(tag_tree(), Some(tag_cog()))
        .expect("registration should succeed");
    client
        .add_interaction(
            command()
                .sync_command(false)
                .decorate(recording_handler("debug", bare_signature())),
            None,
        )
        .expect("registration should succeed");
    client
        .add_interaction(command().decorate(recording_handler("ping", bare_signature())), None)
        .expect("registration should succeed");
    let remote = BTreeMap::from([
        (
            (CommandKind::ChatInput, "tag".to_owned()),
            tag.fingerprint().to_owned(),
        ),
        (
            (CommandKind::ChatInput, "ping".to_owned()),
            "stale".to_owned(),
        ),
    ]);

    let pending = client.pending_sync(&remote).expect("listing should succeed");

    let names: Vec<&str> = pending.iter().map(|schema| schema.name.as_str()).collect();
    assert_eq!(names, vec!["ping"]);
}

#[rstest]
#[case::neither_synced(&[], &[CommandKind::ChatInput, CommandKind::User])]
#[case::slash_synced(&[CommandKind::ChatInput], &[CommandKind::User])]
#[case::menu_synced(&[CommandKind::User], &[CommandKind::ChatInput])]
#[case::both_synced(&[CommandKind::ChatInput, CommandKind::User], &[])]
fn pending_sync_tells_kinds_sharing_a_name_apart(
    client: TestClient,
    #[case] synced: &[CommandKind],
    #[case] expected: &[CommandKind],
) {
    let registered = [
        client
            .add_interaction(command().decorate(recording_handler("inspect", bare_signature())), None)
            .expect("slash registration should succeed"),
        client
            .add_interaction(user().decorate(recording_handler("inspect", bare_signature())), None)
            .expect("menu registration should succeed"),
    ];
    let remote: BTreeMap<(CommandKind, String), String> = registered
        .iter()
        .filter(|entry| synced.contains(&entry.kind()))
        .map(|entry| {
            (
                (entry.kind(), entry.name().to_owned()),
                entry.fingerprint().to_owned(),
            )
        })
        .collect();

    let pending = client.pending_sync(&remote).expect("listing should succeed");

    let wire_kinds: Vec<u8> = pending.iter().map(|schema| schema.kind).collect();
    let expected_kinds: Vec<u8> = expected.iter().map(|kind| kind.wire_value()).collect();
    assert_eq!(wire_kinds, expected_kinds);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_routes_to_subcommand_with_cog(client: TestClient) {
    client
        .add_interaction(tag_tree(), Some(tag_cog()))
        .expect("registration should succeed");
    let ctx = TestContext::for_user("grace");

    client
        .dispatch(
            "tag add",
            &ctx,
            &raw(&[("name", ArgumentValue::String("rust".to_owned()))]),
        )
        .await
        .expect("dispatch should succeed");

    let calls = ctx.recorded_calls();
    assert_eq!(calls.len(), 1);
    let call = calls.first().expect("one call should be recorded");
    assert_eq!(call.handler, "add");
    assert_eq!(call.receiver.as_deref(), Some("tags"));
    assert_eq!(call.arguments.string("name"), Some("rust"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_runs_group_checks_before_members(client: TestClient) {
    client
        .add_interaction(tag_tree(), Some(tag_cog()))
        .expect("registration should succeed");
    let stranger = TestContext::for_user("mallory");
    let owner = TestContext::for_user("ada");

    let denied = client.dispatch("tag admin purge", &stranger, &BTreeMap::new()).await;
    client
        .dispatch("tag admin purge", &owner, &BTreeMap::new())
        .await
        .expect("owner dispatch should succeed");

    assert!(matches!(denied, Err(DispatchError::Forbidden(ref path)) if path == "tag admin purge"));
    assert!(stranger.recorded_calls().is_empty());
    assert_eq!(owner.recorded_calls().len(), 1);
}

#[rstest]
#[case::empty("")]
#[case::unknown_root("label add")]
#[case::unknown_leaf("tag remove")]
#[case::group_without_leaf("tag admin")]
#[case::root_of_tree("tag")]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_reports_unknown_paths(client: TestClient, #[case] path: &str) {
    client
        .add_interaction(tag_tree(), Some(tag_cog()))
        .expect("registration should succeed");

    let result = client
        .dispatch(path, &TestContext::default(), &BTreeMap::new())
        .await;

    assert!(matches!(result, Err(DispatchError::UnknownCommand(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_validates_arguments(client: TestClient) {
    client
        .add_interaction(command().decorate(recording_handler("tag", tag_signature())), None)
        .expect("registration should succeed");
    let ctx = TestContext::default();

    let result = client
        .dispatch("tag", &ctx, &raw(&[("count", ArgumentValue::Integer(2))]))
        .await;

    assert!(matches!(
        result,
        Err(DispatchError::Argument(ArgumentError::MissingRequiredOption { ref option, .. }))
            if option == "name"
    ));
    assert!(ctx.recorded_calls().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn context_menu_dispatch_binds_target(client: TestClient) {
    let signature = bare_signature().parameter(Parameter::typed("member", OptionType::User));
    client
        .add_interaction(
            user().name("Inspect").decorate(recording_handler("inspect", signature)),
            None,
        )
        .expect("registration should succeed");
    let ctx = TestContext::default();

    client
        .dispatch_context_menu(CommandKind::User, "Inspect", &ctx, 80_351_110_224_678_912)
        .await
        .expect("dispatch should succeed");
    let wrong_kind = client
        .dispatch_context_menu(CommandKind::Message, "Inspect", &ctx, 1)
        .await;

    let calls = ctx.recorded_calls();
    let call = calls.first().expect("one call should be recorded");
    assert_eq!(call.arguments.snowflake("member"), Some(80_351_110_224_678_912));
    assert!(matches!(wrong_kind, Err(DispatchError::UnknownCommand(_))));
}
