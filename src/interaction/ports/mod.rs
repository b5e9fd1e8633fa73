//! Port definitions for command execution and storage.
//!
//! Ports describe the collaborators the command tree relies on without
//! binding it to a concrete bot framework: permission checks, handlers and
//! their grouping objects, and command storage.

pub mod check;
pub mod handler;
pub mod registry;

pub use check::{
    Check, CheckError, CheckFn, CheckResult, PredicateCheck, SharedCheck, check_fn, predicate,
    run_checks,
};
pub use handler::{
    Cog, CommandHandler, HandlerError, HandlerFn, HandlerResult, Invocation, OwnedInvocation,
    SharedCog, SharedHandler,
};
pub use registry::{CommandRegistry, CommandRegistryError, CommandRegistryResult};
