//! HTML presentation layer.
//!
//! Server-rendered pages via Askama templates.
//!
//! - [`handlers`] - Page rendering and redirect handlers

pub mod handlers;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Builds a `302 Found` redirect.
///
/// Axum's [`axum::response::Redirect`] helpers emit 303/307/308; the
/// redirect flows here use the classic 302.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_owned())]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_is_302_with_location() {
        let response = found("/url-error.php");

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/url-error.php"
        );
    }
}
