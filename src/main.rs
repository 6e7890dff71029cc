//! Ledger Service - Main Application Entry Point
//!
//! REST API server for a double-entry ledger: accounts, bookkeeping
//! entries, and atomic transfers between accounts.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

use tracing_subscriber::EnvFilter;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use ledger_service::{config, db, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        // Account management routes
        .route("/api/v1/accounts", post(handlers::accounts::create_account))
        .route("/api/v1/accounts", get(handlers::accounts::list_accounts))
        .route(
            "/api/v1/accounts/{id}",
            get(handlers::accounts::get_account),
        )
        .route(
            "/api/v1/accounts/{id}",
            delete(handlers::accounts::delete_account),
        )
        .route(
            "/api/v1/accounts/{id}/balance",
            put(handlers::accounts::update_account_balance),
        )
        // Transfer routes
        .route(
            "/api/v1/transfers",
            post(handlers::transfers::create_transfer),
        )
        .route(
            "/api/v1/transfers",
            get(handlers::transfers::list_transfers),
        )
        .route(
            "/api/v1/transfers/{id}",
            get(handlers::transfers::get_transfer),
        )
        // Entry routes (read-only, entries are written by transfers)
        .route("/api/v1/entries", get(handlers::entries::list_entries))
        .route("/api/v1/entries/{id}", get(handlers::entries::get_entry))
        // Distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share database pool with all handlers via State extraction
        .with_state(pool);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
