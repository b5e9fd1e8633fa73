//! Unit tests for the interaction module.
//!
//! Tests are organised by concept: signature reconciliation, the command
//! tree, checks, argument resolution, and the client.

mod client_tests;
