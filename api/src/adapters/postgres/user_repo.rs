//! PostgreSQL adapter for UserRepository
//!
//! Users are written through the `usp_add_user` stored procedure rather than
//! a direct insert; the procedure owns the `users` table layout.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement, Value};

use crate::domain::entities::NewUser;
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

const ADD_USER_SQL: &str = "CALL usp_add_user($1, $2, $3, $4, $5, $6, $7)";

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Stored procedure arguments, in parameter order
fn add_user_values(user: &NewUser) -> Vec<Value> {
    vec![
        user.firstname.clone().into(),
        user.surname.clone().into(),
        user.date_of_birth.into(),
        user.email_address.clone().into(),
        user.credit_limit.has_credit_limit().into(),
        user.credit_limit.amount().into(),
        user.client.id.0.into(),
    ]
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn add(&self, user: &NewUser) -> Result<(), DomainError> {
        let statement = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            ADD_USER_SQL,
            add_user_values(user),
        );

        self.db
            .execute(statement)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}
