//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod client_repo;
pub mod user_repo;


pub use client_repo::PostgresClientRepository;
pub use user_repo::PostgresUserRepository;
