#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;

use axum::Router;
use short_url::application::services::{LinkService, StatsService};
use short_url::infrastructure::persistence::SqliteUrlRepository;
use short_url::routes::app_router;
use short_url::state::AppState;
use short_url::utils::code_generator::CodeGenerator;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteUrlRepository::new(pool));
    let link_service = Arc::new(LinkService::new(
        repository.clone(),
        CodeGenerator::new(6),
        20,
    ));
    let stats_service = Arc::new(StatsService::new(repository));

    AppState::new(link_service, stats_service)
}

pub fn test_app(pool: SqlitePool) -> Router {
    app_router(create_test_state(pool))
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (code, original_url, created_at) VALUES (?1, ?2, ?3)")
        .bind(code)
        .bind(url)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn clicks_for(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Pulls the short code out of a result page, given the base the page was
/// rendered against (e.g. `http://localhost:5000`).
pub fn extract_code(body: &str, base: &str) -> String {
    let marker = format!("{base}/");
    let start = body
        .find(&marker)
        .unwrap_or_else(|| panic!("no short link in page: {body}"))
        + marker.len();

    body[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect()
}
