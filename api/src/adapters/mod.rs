//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod credit;
pub mod postgres;

pub use credit::HttpCreditScoringClient;
pub use postgres::{PostgresClientRepository, PostgresUserRepository};
