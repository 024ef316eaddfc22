//! Static informational pages: invalid-URL error, 404, and 500.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Template for the invalid-URL error page.
#[derive(Template, WebTemplate)]
#[template(path = "url_error.html")]
pub struct UrlErrorTemplate {}

/// Template for the unknown-short-link page.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {}

/// Template for the generic server error page.
#[derive(Template, WebTemplate)]
#[template(path = "server_error.html")]
pub struct ServerErrorTemplate {}

/// Renders the invalid-URL error page.
///
/// # Endpoint
///
/// `GET /url-error.php`
pub async fn url_error_handler() -> impl IntoResponse {
    (StatusCode::BAD_REQUEST, UrlErrorTemplate {})
}

/// Fallback for unmatched paths, including would-be codes containing a
/// path separator.
pub async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate {})
}
