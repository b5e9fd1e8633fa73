//! Command node tree.
//!
//! A slash command is the root of a tree at most three levels deep:
//! root, subcommand group, subcommand. Groups expose no way to declare
//! further groups, so deeper trees cannot be written. User and message
//! context-menu commands are single nodes.
//!
//! Nodes are built bottom-up by the decorator builders and finalised by
//! one binding pass that assigns the owning cog and reconciles every
//! option list against its handler signature.

mod application;
mod base;
mod context_menu;
mod group;
mod registration;
mod root;
mod subcommand;

pub use application::ApplicationCommand;
pub(crate) use base::NodeAttributes;
pub use base::{CommandNode, HasOptions, HasParent, Lineage, NodeCore};
pub use context_menu::ContextMenuCommand;
pub use group::SubcommandGroup;
pub use registration::RegisteredCommand;
pub use root::{Command, CommandEntry, Route};
pub use subcommand::Subcommand;
