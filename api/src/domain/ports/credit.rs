//! Credit scoring port
//!
//! Abstracts the external service that assigns a base credit limit to a
//! person. Implemented over HTTP by the `credit` adapter.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::CreditServiceError;

#[async_trait]
pub trait CreditScoringService: Send + Sync {
    /// Base credit limit for the given person, before any tier scaling
    async fn get_credit_limit(
        &self,
        firstname: &str,
        surname: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i32, CreditServiceError>;
}
