//! Application command definitions for chat-bot clients.
//!
//! Handlers are wrapped into command nodes by decorator builders; the
//! option schema of each node is derived from the handler's own parameter
//! list once the node is registered. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - The command node tree in [`nodes`], built through [`decorators`]
//! - Adapter implementations in [`adapters`]
//! - Registration and dispatch in [`services`]

pub mod adapters;
pub mod config;
pub mod decorators;
pub mod domain;
pub mod nodes;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
