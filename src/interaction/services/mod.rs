//! Orchestration services for command registration and dispatch.

mod client;

pub use client::{
    DispatchError, InteractionClient, InteractionClientError, InteractionClientResult,
};
