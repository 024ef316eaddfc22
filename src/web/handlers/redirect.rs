//! Handler for short URL redirect.

use axum::extract::{Path, State};
use axum::response::Response;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::found;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolution increments the stored click counter as part of the same
/// lookup; visiting a short link is what the counter counts. Paths with a
/// separator never reach this handler and fall through to the 404 page.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] (the 404 page) for an unassigned code;
/// nothing is created or mutated on a miss.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target = state.link_service.resolve(&code).await?;

    debug!("redirecting {code} -> {target}");

    Ok(found(&target))
}
