//! Given steps for command registration BDD scenarios.

use std::sync::Arc;

use super::world::{CommandWorld, NamedCog, ScenarioContext, recorder};
use interaction_commands::interaction::{
    decorators::command,
    domain::{CommandOption, HandlerSignature, OptionType, Parameter},
    nodes::ApplicationCommand,
    ports::predicate,
};
use rstest_bdd_macros::given;

#[given(r#"a tag command tree owned by the "{cog}" cog"#)]
fn tag_command_tree(world: &mut CommandWorld, cog: String) {
    let owned = || HandlerSignature::new().receiver().context();
    let mut tag = command()
        .description("Manage tags")
        .decorate(recorder("tag", owned()));
    tag.subcommand()
        .name("add")
        .description("Add a tag")
        .decorate(recorder(
            "add",
            owned().parameter(Parameter::typed("name", OptionType::String)),
        ));
    tag.subcommand_group()
        .name("admin")
        .check(predicate(|ctx: &ScenarioContext| ctx.user == "ada"))
        .decorate(recorder("admin", owned()))
        .subcommand()
        .name("purge")
        .decorate(recorder("purge", owned()));
    world.pending = Some(ApplicationCommand::from(tag));
    world.cog = Some(Arc::new(NamedCog(cog)));
}

#[given(r#"a "{name}" command declaring {options:usize} options for a handler with {parameters:usize} parameter"#)]
fn mismatched_command(world: &mut CommandWorld, name: String, options: usize, parameters: usize) {
    let signature = (0..parameters).fold(HandlerSignature::new().context(), |signature, index| {
        signature.parameter(Parameter::typed(format!("arg{index}"), OptionType::String))
    });
    let declared = (0..options).map(|_| CommandOption::new());
    let greet = command()
        .name(name)
        .options(declared)
        .decorate(recorder("greet", signature));
    world.pending = Some(ApplicationCommand::from(greet));
    world.cog = None;
}
