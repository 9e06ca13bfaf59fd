//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks record what they were asked to do so tests can assert on
//! collaborator calls (for example that nothing was stored on rejection).

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
