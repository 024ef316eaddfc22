//! Handler for the aggregate stats page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;

/// Template for the stats page.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub total: i64,
}

/// Renders the total number of shortened URLs.
///
/// # Endpoint
///
/// `GET /stats`
///
/// # Errors
///
/// Returns [`AppError::Database`] on database errors.
pub async fn stats_handler(State(state): State<AppState>) -> Result<StatsTemplate, AppError> {
    let total = state.stats_service.count().await?;

    Ok(StatsTemplate { total })
}
