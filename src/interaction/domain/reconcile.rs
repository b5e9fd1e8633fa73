//! Signature-to-schema reconciliation.
//!
//! Binds declared options to handler parameters by position, fills in any
//! unset names and types from the parameters, and infers requiredness from
//! the absence of defaults.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{CommandDefinitionError, CommandOption, HandlerSignature, Parameter};

/// Leading parameters of a free-standing handler: the invocation context.
pub const FREE_HANDLER_SKIP: usize = 1;

/// Leading parameters of a cog-bound handler: the receiver and the context.
pub const COG_HANDLER_SKIP: usize = 2;

/// Treatment of bindable parameters that carry no type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UntypedParameterPolicy {
    /// Leave the parameter out of the option list.
    #[default]
    Drop,
    /// Fail signature binding.
    Reject,
}

/// Returns the number of implicit leading handler parameters.
#[must_use]
pub const fn skip_count(bound_to_cog: bool) -> usize {
    if bound_to_cog {
        COG_HANDLER_SKIP
    } else {
        FREE_HANDLER_SKIP
    }
}

/// Derives the validated option list for a handler.
///
/// The first `skip` parameters are implicit and never become options. The
/// remaining parameters pair with `options` by position; blank options are
/// synthesised for parameters without an explicit counterpart. The result
/// follows parameter declaration order.
///
/// # Errors
///
/// Returns [`CommandDefinitionError::OptionCountMismatch`] when more options
/// are declared than there are bindable parameters,
/// [`CommandDefinitionError::MissingImplicitParameters`] when the handler
/// declares fewer than `skip` parameters, and
/// [`CommandDefinitionError::UntypedParameter`] when an untyped parameter is
/// met under [`UntypedParameterPolicy::Reject`].
pub fn reconcile_signature_options(
    command: &str,
    signature: &HandlerSignature,
    options: &[CommandOption],
    skip: usize,
    policy: UntypedParameterPolicy,
) -> Result<Vec<CommandOption>, CommandDefinitionError> {
    let bindable = signature.parameters().get(skip..).ok_or_else(|| {
        CommandDefinitionError::MissingImplicitParameters {
            command: command.to_owned(),
            skip,
            found: signature.len(),
        }
    })?;

    if options.len() > bindable.len() {
        return Err(CommandDefinitionError::OptionCountMismatch {
            command: command.to_owned(),
            options: options.len(),
            parameters: bindable.len(),
        });
    }

    let padded = options
        .iter()
        .cloned()
        .chain(std::iter::repeat_with(CommandOption::new));

    let mut resolved = Vec::with_capacity(bindable.len());
    for (option, parameter) in padded.zip(bindable) {
        if parameter.annotation.is_none() {
            match policy {
                UntypedParameterPolicy::Drop => {
                    warn!(
                        command,
                        parameter = %parameter.name,
                        "dropping option for untyped handler parameter"
                    );
                    continue;
                }
                UntypedParameterPolicy::Reject => {
                    return Err(CommandDefinitionError::UntypedParameter {
                        command: command.to_owned(),
                        parameter: parameter.name.clone(),
                    });
                }
            }
        }
        resolved.push(bind_option(option, parameter));
    }

    debug!(
        command,
        skip,
        options = resolved.len(),
        "reconciled handler signature"
    );
    Ok(resolved)
}

fn bind_option(mut option: CommandOption, parameter: &Parameter) -> CommandOption {
    option.parameter_name = Some(parameter.name.clone());
    if option.name.is_none() {
        option.name = Some(parameter.name.clone());
    }
    option.required = option.required || !parameter.has_default;
    if option.option_type.is_none() {
        option.option_type = parameter.annotation;
    }
    option
}
