//! Onboarding API Server
//!
//! Admits new users for client accounts after validating their details and
//! establishing a credit limit from the client's tier.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{HttpCreditScoringClient, PostgresClientRepository, PostgresUserRepository};
use app::UserService;
use config::Config;
use domain::ports::{ClientRepository, CreditScoringService, UserRepository};

/// User service wired to the production adapters
type DefaultUserService =
    UserService<PostgresClientRepository, HttpCreditScoringClient, PostgresUserRepository>;

/// Application state shared across all handlers
pub struct AppState<CR, CS, UR>
where
    CR: ClientRepository,
    CS: CreditScoringService,
    UR: UserRepository,
{
    pub user_service: Arc<UserService<CR, CS, UR>>,
}

impl<CR, CS, UR> Clone for AppState<CR, CS, UR>
where
    CR: ClientRepository,
    CS: CreditScoringService,
    UR: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            user_service: self.user_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the routes, without the network-facing middleware
fn router<CR, CS, UR>(state: AppState<CR, CS, UR>) -> Router
where
    CR: ClientRepository + 'static,
    CS: CreditScoringService + 'static,
    UR: UserRepository + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/users", post(handlers::add_user::<CR, CS, UR>))
        .with_state(state)
}

/// Connect the default adapters and build the user service on top of them
async fn build_user_service(config: &Config) -> anyhow::Result<DefaultUserService> {
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    let client_repo = Arc::new(PostgresClientRepository::new(db.clone()));
    let user_repo = Arc::new(PostgresUserRepository::new(db));
    let credit_client = Arc::new(
        HttpCreditScoringClient::new(
            config.credit_service_url.clone(),
            config.credit_service_timeout,
        )
        .context("Failed to build credit scoring client")?,
    );

    Ok(UserService::new(client_repo, credit_client, user_repo))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,onboarding_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Onboarding API...");

    let config = Config::from_env()?;

    let state = AppState {
        user_service: Arc::new(build_user_service(&config).await?),
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("Failed to build governor config")?,
    );

    let app = router(state)
        .layer(GovernorLayer {
            config: governor_config,
        })
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
