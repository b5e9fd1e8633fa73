//! Command node kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag distinguishing the node variants of a command tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    /// Top-level slash command.
    ChatInput,
    /// Context-menu action on a user.
    User,
    /// Context-menu action on a message.
    Message,
    /// Group of subcommands beneath a slash command.
    SubcommandGroup,
    /// Leaf subcommand beneath a slash command or a group.
    Subcommand,
}

impl CommandKind {
    /// Returns the numeric tag used in the platform's command payloads.
    ///
    /// Top-level kinds use the command type space; tree kinds use the
    /// option type space.
    #[must_use]
    pub const fn wire_value(self) -> u8 {
        match self {
            Self::ChatInput | Self::Subcommand => 1,
            Self::User | Self::SubcommandGroup => 2,
            Self::Message => 3,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ChatInput => "chat_input",
            Self::User => "user",
            Self::Message => "message",
            Self::SubcommandGroup => "subcommand_group",
            Self::Subcommand => "subcommand",
        };
        f.write_str(label)
    }
}
