//! User domain entity
//!
//! Covers the inbound registration request and the candidate user built
//! from it. A candidate only becomes a stored user once it passes every gate.

use chrono::NaiveDate;
use serde::Serialize;

use super::client::{Client, ClientId};

/// Input to a registration attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub firstname: String,
    pub surname: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client_id: ClientId,
}

/// Credit limit assigned to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "lowercase")]
pub enum CreditLimit {
    /// The user is not subject to a credit limit
    Unlimited,
    Limited(i32),
}

impl CreditLimit {
    pub fn has_credit_limit(&self) -> bool {
        matches!(self, CreditLimit::Limited(_))
    }

    /// Limit amount; zero when there is no limit
    pub fn amount(&self) -> i32 {
        match self {
            CreditLimit::Unlimited => 0,
            CreditLimit::Limited(amount) => *amount,
        }
    }
}

/// A user that has passed validation and is ready to be stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub firstname: String,
    pub surname: String,
    pub email_address: String,
    pub date_of_birth: NaiveDate,
    pub client: Client,
    pub credit_limit: CreditLimit,
}

impl NewUser {
    /// Users without a limit always meet the minimum
    pub fn meets_minimum_credit_limit(&self, minimum: i32) -> bool {
        match self.credit_limit {
            CreditLimit::Unlimited => true,
            CreditLimit::Limited(amount) => amount >= minimum,
        }
    }
}
