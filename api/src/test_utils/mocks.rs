//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Client, ClientId, NewUser};
use crate::domain::ports::{ClientRepository, CreditScoringService, UserRepository};
use crate::error::{CreditServiceError, DomainError};

// ============================================================================
// In-Memory Client Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryClientRepository {
    clients: Arc<RwLock<HashMap<ClientId, Client>>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a client for testing
    pub fn with_client(self, client: Client) -> Self {
        self.clients.write().unwrap().insert(client.id, client);
        self
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn get_by_id(&self, id: ClientId) -> Result<Option<Client>, DomainError> {
        let clients = self.clients.read().unwrap();
        Ok(clients.get(&id).cloned())
    }
}

// ============================================================================
// Mock Credit Scoring Service
// ============================================================================

type CreditCall = (String, String, NaiveDate);

/// Returns a fixed credit limit and records every call
#[derive(Default)]
pub struct MockCreditScoringService {
    credit_limit: i32,
    should_fail: bool,
    calls: Arc<RwLock<Vec<CreditCall>>>,
}

impl MockCreditScoringService {
    pub fn returning(credit_limit: i32) -> Self {
        Self {
            credit_limit,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<CreditCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl CreditScoringService for MockCreditScoringService {
    async fn get_credit_limit(
        &self,
        firstname: &str,
        surname: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i32, CreditServiceError> {
        self.calls.write().unwrap().push((
            firstname.to_string(),
            surname.to_string(),
            date_of_birth,
        ));

        if self.should_fail {
            return Err(CreditServiceError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        Ok(self.credit_limit)
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<NewUser>>>,
    should_fail: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Users stored so far, in insertion order
    pub fn added(&self) -> Vec<NewUser> {
        self.users.read().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add(&self, user: &NewUser) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(DomainError::Database("Mock failure".to_string()));
        }

        self.users.write().unwrap().push(user.clone());
        Ok(())
    }
}
