//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Client, ClientId, NewUser};
use crate::error::DomainError;

/// Directory of known clients
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Find a client by ID
    async fn get_by_id(&self, id: ClientId) -> Result<Option<Client>, DomainError>;
}

/// Store for accepted users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user that passed registration
    async fn add(&self, user: &NewUser) -> Result<(), DomainError>;
}
