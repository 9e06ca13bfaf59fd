//! PostgreSQL adapter for ClientRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::entities::{Client, ClientId};
use crate::domain::ports::ClientRepository;
use crate::entity::clients;
use crate::error::DomainError;

/// PostgreSQL implementation of ClientRepository
pub struct PostgresClientRepository {
    db: DatabaseConnection,
}

impl PostgresClientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn get_by_id(&self, id: ClientId) -> Result<Option<Client>, DomainError> {
        let result = clients::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

impl From<clients::Model> for Client {
    fn from(model: clients::Model) -> Self {
        Client {
            id: ClientId(model.id),
            name: model.name.unwrap_or_default(),
        }
    }
}
