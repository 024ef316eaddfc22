//! Router assembly for the public HTTP surface.
//!
//! # Route Structure
//!
//! - `GET  /`              - Submission form
//! - `POST /`              - Shorten a URL
//! - `GET  /url-error.php` - Invalid-URL page (400)
//! - `GET  /stats`         - Total link count
//! - `GET  /{code}`        - Short link redirect
//! - `/static/*`           - Static assets
//!
//! Anything else, including would-be codes containing `/`, falls through
//! to the 404 page.

use crate::state::AppState;
use crate::web::handlers::{
    home_handler, not_found_handler, redirect_handler, shorten_handler, stats_handler,
    url_error_handler,
};
use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Constructs the application router with all routes and middleware.
///
/// Exact routes take precedence over the `/{code}` capture, so `/stats`
/// and `/url-error.php` are never treated as short codes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler).post(shorten_handler))
        .route("/url-error.php", get(url_error_handler))
        .route("/stats", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
