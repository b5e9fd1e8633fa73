//! Interaction commands: declarative application command trees.
//!
//! This crate models the slash, user, and message commands a chat bot
//! registers with its platform. Commands are declared with decorator
//! builders, bound to their handler signatures, and dispatched through an
//! interaction client.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Options, signatures, reconciliation, and wire schemas
//! - **Ports**: Handler, check, and registry traits
//! - **Adapters**: Concrete implementations of ports (in-memory registry)
//!
//! # Modules
//!
//! - [`interaction`]: Command nodes, decorators, and the interaction client

pub mod interaction;
