//! User service
//!
//! Decides whether a registration is admitted and stores the user when it is.
//!
//! Gates run in order and stop at the first failure:
//! 1. first name and surname present
//! 2. email address well formed
//! 3. applicant old enough
//! 4. client resolved from the directory
//! 5. credit limit derived from the client tier
//! 6. credit limit at or above the minimum
//!
//! A failed gate yields `Ok(false)` and nothing is stored. Collaborator
//! failures are returned as errors untouched.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use super::registration_policy::MIN_CREDIT_LIMIT;
use super::validation::{has_required_names, is_old_enough, is_valid_email};
use crate::domain::entities::{Client, CreditLimit, CreditPolicy, NewUser, RegistrationRequest};
use crate::domain::ports::{ClientRepository, CreditScoringService, UserRepository};
use crate::error::{AppError, DomainError};

/// Service for admitting new users
pub struct UserService<CR, CS, UR>
where
    CR: ClientRepository,
    CS: CreditScoringService,
    UR: UserRepository,
{
    clients: Arc<CR>,
    credit: Arc<CS>,
    users: Arc<UR>,
}

impl<CR, CS, UR> UserService<CR, CS, UR>
where
    CR: ClientRepository,
    CS: CreditScoringService,
    UR: UserRepository,
{
    pub fn new(clients: Arc<CR>, credit: Arc<CS>, users: Arc<UR>) -> Self {
        Self {
            clients,
            credit,
            users,
        }
    }

    /// Register a new user, judging age against today's local date
    ///
    /// Returns `Ok(true)` if the user was stored, `Ok(false)` if rejected.
    pub async fn add_user(&self, request: &RegistrationRequest) -> Result<bool, AppError> {
        self.add_user_on(request, Local::now().date_naive()).await
    }

    /// Register a new user as of `today`
    pub async fn add_user_on(
        &self,
        request: &RegistrationRequest,
        today: NaiveDate,
    ) -> Result<bool, AppError> {
        if !has_required_names(&request.firstname, &request.surname) {
            tracing::debug!("Registration rejected: missing first name or surname");
            return Ok(false);
        }

        if !is_valid_email(&request.email) {
            tracing::debug!(email = %request.email, "Registration rejected: invalid email");
            return Ok(false);
        }

        if !is_old_enough(request.date_of_birth, today) {
            tracing::debug!(
                date_of_birth = %request.date_of_birth,
                "Registration rejected: applicant too young"
            );
            return Ok(false);
        }

        let client = self
            .clients
            .get_by_id(request.client_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("Client {} not found", request.client_id))
            })?;

        let user = self.create_user(request, client).await?;

        if !user.meets_minimum_credit_limit(MIN_CREDIT_LIMIT) {
            tracing::debug!(
                credit_limit = user.credit_limit.amount(),
                "Registration rejected: credit limit below minimum"
            );
            return Ok(false);
        }

        self.users.add(&user).await?;

        tracing::info!(
            client_id = %user.client.id,
            has_credit_limit = user.credit_limit.has_credit_limit(),
            "User registered"
        );

        Ok(true)
    }

    /// Build the candidate user, fetching a credit limit when the tier needs one
    async fn create_user(
        &self,
        request: &RegistrationRequest,
        client: Client,
    ) -> Result<NewUser, AppError> {
        let tier = client.tier();

        let credit_limit = match tier.credit_policy() {
            CreditPolicy::Exempt => CreditLimit::Unlimited,
            CreditPolicy::Scored { multiplier } => {
                let base = self
                    .credit
                    .get_credit_limit(&request.firstname, &request.surname, request.date_of_birth)
                    .await?;
                CreditLimit::Limited(base.saturating_mul(multiplier))
            }
        };

        tracing::debug!(%tier, credit_limit = credit_limit.amount(), "Credit limit derived");

        Ok(NewUser {
            firstname: request.firstname.clone(),
            surname: request.surname.clone(),
            email_address: request.email.clone(),
            date_of_birth: request.date_of_birth,
            client,
            credit_limit,
        })
    }
}
