//! User handlers
//!
//! Endpoint for user registration.

use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{ClientId, RegistrationRequest};
use crate::domain::ports::{ClientRepository, CreditScoringService, UserRepository};
use crate::error::AppError;
use crate::AppState;

/// Request body for user registration
///
/// Names and email are optional on the wire; a missing value is treated as
/// empty and fails validation rather than deserialization.
#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub date_of_birth: NaiveDate,
    pub client_id: i32,
}

impl From<AddUserRequest> for RegistrationRequest {
    fn from(request: AddUserRequest) -> Self {
        RegistrationRequest {
            firstname: request.firstname.unwrap_or_default(),
            surname: request.surname.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            date_of_birth: request.date_of_birth,
            client_id: ClientId(request.client_id),
        }
    }
}

/// Response body for user registration
#[derive(Debug, Serialize, Deserialize)]
pub struct AddUserResponse {
    pub accepted: bool,
}

/// POST /users
///
/// Register a new user. Responds 201 when the user was stored and 200 with
/// `accepted: false` when the registration was rejected.
pub async fn add_user<CR, CS, UR>(
    State(state): State<AppState<CR, CS, UR>>,
    Json(request): Json<AddUserRequest>,
) -> Result<(StatusCode, Json<AddUserResponse>), AppError>
where
    CR: ClientRepository + 'static,
    CS: CreditScoringService + 'static,
    UR: UserRepository + 'static,
{
    let request = RegistrationRequest::from(request);
    let accepted = state.user_service.add_user(&request).await?;

    let status = if accepted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(AddUserResponse { accepted })))
}
