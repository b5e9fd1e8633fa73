//! Registered command aggregate.

use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;

use super::application::ApplicationCommand;
use crate::interaction::domain::{ApplicationCommandSchema, CommandId, CommandKind};

/// A bound command together with its derived payload and sync state.
pub struct RegisteredCommand<C> {
    id: CommandId,
    command: ApplicationCommand<C>,
    schema: ApplicationCommandSchema,
    fingerprint: String,
    sync: bool,
    registered_at: DateTime<Utc>,
}

impl<C> RegisteredCommand<C> {
    /// Creates a registration stamped with the clock's current time.
    #[must_use]
    pub fn new(
        command: ApplicationCommand<C>,
        schema: ApplicationCommandSchema,
        fingerprint: String,
        sync: bool,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: CommandId::new(),
            command,
            schema,
            fingerprint,
            sync,
            registered_at: clock.utc(),
        }
    }

    /// Returns the registration identifier.
    #[must_use]
    pub const fn id(&self) -> CommandId {
        self.id
    }

    /// Returns the bound command.
    #[must_use]
    pub const fn command(&self) -> &ApplicationCommand<C> {
        &self.command
    }

    /// Returns the command kind.
    #[must_use]
    pub fn kind(&self) -> CommandKind {
        self.command.kind()
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.command.name()
    }

    /// Returns the wire payload.
    #[must_use]
    pub const fn schema(&self) -> &ApplicationCommandSchema {
        &self.schema
    }

    /// Returns the payload fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Returns whether the command should be pushed to the platform.
    #[must_use]
    pub const fn sync(&self) -> bool {
        self.sync
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl<C> fmt::Debug for RegisteredCommand<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredCommand")
            .field("id", &self.id)
            .field("command", &self.command)
            .field("fingerprint", &self.fingerprint)
            .field("sync", &self.sync)
            .field("registered_at", &self.registered_at)
            .finish_non_exhaustive()
    }
}
