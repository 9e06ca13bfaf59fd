//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::NaiveDate;

use crate::domain::entities::{Client, ClientId, RegistrationRequest};

/// Client ID used by `registration_request`
pub const TEST_CLIENT_ID: ClientId = ClientId(4);

/// Fixed "today" used by date-sensitive tests
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Create a test client with the given name (tier label)
pub fn test_client(name: &str) -> Client {
    Client {
        id: TEST_CLIENT_ID,
        name: name.to_string(),
    }
}

/// Create a registration request that passes every input check
pub fn registration_request() -> RegistrationRequest {
    RegistrationRequest {
        firstname: "John".to_string(),
        surname: "Doe".to_string(),
        email: "John.doe@gmail.com".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        client_id: TEST_CLIENT_ID,
    }
}
