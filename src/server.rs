//! HTTP server initialization and runtime setup.
//!
//! Handles database setup, service construction, and the Axum server
//! lifecycle.

use std::sync::Arc;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::application::services::{LinkService, StatsService};
use crate::config::Config;
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::CodeGenerator;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if missing)
/// - Schema migrations
/// - Application services and router
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened or migrated
/// - The listener cannot bind
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let options = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;
    tracing::info!("Opened database at {}", config.database_path);

    sqlx::migrate!("./migrations").run(&pool).await?;

    let repository = Arc::new(SqliteUrlRepository::new(pool));
    let link_service = Arc::new(LinkService::new(
        repository.clone(),
        CodeGenerator::new(config.code_length),
        config.max_generation_attempts,
    ));
    let stats_service = Arc::new(StatsService::new(repository));

    let state = AppState::new(link_service, stats_service);
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
