//! Application error type shared across layers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::web::handlers::{NotFoundTemplate, ServerErrorTemplate};

/// Errors surfaced by the shortening and resolution services.
///
/// Invalid submitted URLs never appear here: the normalizer reports
/// rejection through its own `Result` and the handler redirects to the
/// error page without raising a fault.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No record matches the requested short code.
    #[error("short link not found")]
    NotFound,

    /// The store rejected an insert because the code is already taken.
    /// The shortening service retries on this; it escapes a request only
    /// if a retry bug lets it through.
    #[error("short code already taken")]
    CodeConflict,

    /// The bounded generation loop ran out of attempts, meaning the code
    /// space is saturated at the configured length.
    #[error("could not allocate a unique short code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Maps a sqlx error, turning the store's unique-constraint violation into
/// [`AppError::CodeConflict`] so the shortening service can retry on it.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db) = e {
        if db.is_unique_violation() {
            return AppError::CodeConflict;
        }
    }

    AppError::Database(e)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, NotFoundTemplate {}).into_response(),
            AppError::CodeSpaceExhausted { .. }
            | AppError::CodeConflict
            | AppError::Database(_) => {
                tracing::error!("{self}");
                (StatusCode::INTERNAL_SERVER_ERROR, ServerErrorTemplate {}).into_response()
            }
        }
    }
}
