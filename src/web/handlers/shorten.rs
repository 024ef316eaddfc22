//! Handler for the URL submission form.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::request_base_url;
use crate::utils::url_normalizer::normalize_url;
use crate::web::found;

/// Form body of the shortening request.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}

/// Template for the result page showing the freshly minted short link.
#[derive(Template, WebTemplate)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub original_url: String,
    pub short_url: String,
}

/// Shortens the submitted URL and renders the result page.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Flow
///
/// 1. Normalize the `url` form field; rejection sends the browser to the
///    error page with a `302`, never an error response
/// 2. Shorten through [`crate::application::services::LinkService`]
///    (dedup or fresh code)
/// 3. Render the page containing `scheme://host/code`, with host taken
///    from the request's own headers
///
/// # Errors
///
/// Returns [`AppError::CodeSpaceExhausted`] or [`AppError::Database`] as a
/// 500 page; invalid input is not an error.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ShortenForm>,
) -> Result<Response, AppError> {
    let original_url = match normalize_url(&form.url) {
        Ok(url) => url,
        Err(reason) => {
            debug!("rejected submitted url: {reason}");
            return Ok(found("/url-error.php"));
        }
    };

    let record = state.link_service.shorten(&original_url).await?;
    let short_url = format!("{}/{}", request_base_url(&headers), record.code);

    Ok(ResultTemplate {
        original_url,
        short_url,
    }
    .into_response())
}
