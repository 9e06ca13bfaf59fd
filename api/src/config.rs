use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_CREDIT_SERVICE_URL: &str = "http://localhost:8090";
const DEFAULT_CREDIT_SERVICE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Base URL of the credit scoring service
    pub credit_service_url: String,
    /// Per-request timeout for credit scoring calls
    pub credit_service_timeout: Duration,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let credit_service_timeout_secs = match lookup("CREDIT_SERVICE_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid CREDIT_SERVICE_TIMEOUT_SECS: {raw}"))?,
            None => DEFAULT_CREDIT_SERVICE_TIMEOUT_SECS,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid PORT: {raw}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            credit_service_url: lookup("CREDIT_SERVICE_URL")
                .unwrap_or_else(|| DEFAULT_CREDIT_SERVICE_URL.to_string()),
            credit_service_timeout: Duration::from_secs(credit_service_timeout_secs),
            port,
        })
    }
}
