//! In-memory adapters.

mod registry;

pub use registry::InMemoryCommandRegistry;
