//! In-memory command registry adapter.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::interaction::domain::CommandKind;
use crate::interaction::nodes::RegisteredCommand;
use crate::interaction::ports::{CommandRegistry, CommandRegistryError, CommandRegistryResult};

/// Thread-safe in-memory command registry.
pub struct InMemoryCommandRegistry<C> {
    state: Arc<RwLock<InMemoryRegistryState<C>>>,
}

struct InMemoryRegistryState<C> {
    commands: HashMap<(CommandKind, String), Arc<RegisteredCommand<C>>>,
    order: Vec<(CommandKind, String)>,
}

impl<C> InMemoryCommandRegistry<C> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryRegistryState {
                commands: HashMap::new(),
                order: Vec::new(),
            })),
        }
    }
}

impl<C> Default for InMemoryCommandRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for InMemoryCommandRegistry<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<C> fmt::Debug for InMemoryCommandRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryCommandRegistry").finish_non_exhaustive()
    }
}

fn poisoned(err: impl fmt::Display) -> CommandRegistryError {
    CommandRegistryError::Unavailable(err.to_string())
}

impl<C> CommandRegistry<C> for InMemoryCommandRegistry<C>
where
    C: 'static,
{
    fn register(&self, command: Arc<RegisteredCommand<C>>) -> CommandRegistryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let key = (command.kind(), command.name().to_owned());
        if state.commands.contains_key(&key) {
            return Err(CommandRegistryError::Duplicate {
                kind: key.0,
                name: key.1,
            });
        }
        state.order.push(key.clone());
        state.commands.insert(key, command);
        Ok(())
    }

    fn find(
        &self,
        kind: CommandKind,
        name: &str,
    ) -> CommandRegistryResult<Option<Arc<RegisteredCommand<C>>>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.commands.get(&(kind, name.to_owned())).cloned())
    }

    fn list(&self) -> CommandRegistryResult<Vec<Arc<RegisteredCommand<C>>>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .order
            .iter()
            .filter_map(|key| state.commands.get(key).cloned())
            .collect())
    }
}
