//! Credit scoring HTTP client implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::ports::CreditScoringService;
use crate::error::CreditServiceError;

/// HTTP implementation of the credit scoring service
pub struct HttpCreditScoringClient {
    http: Client,
    base_url: String,
}

impl HttpCreditScoringClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, CreditServiceError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, CreditServiceError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| CreditServiceError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(CreditServiceError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(CreditServiceError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CreditServiceError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[derive(Serialize)]
struct CreditLimitRequest<'a> {
    firstname: &'a str,
    surname: &'a str,
    date_of_birth: NaiveDate,
}

#[derive(Deserialize)]
struct CreditLimitResponse {
    credit_limit: i32,
}

#[async_trait]
impl CreditScoringService for HttpCreditScoringClient {
    async fn get_credit_limit(
        &self,
        firstname: &str,
        surname: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i32, CreditServiceError> {
        let response = self
            .http
            .post(self.api_url("/credit-limit"))
            .json(&CreditLimitRequest {
                firstname,
                surname,
                date_of_birth,
            })
            .send()
            .await?;

        let body: CreditLimitResponse = self.handle_response(response).await?;
        Ok(body.credit_limit)
    }
}
