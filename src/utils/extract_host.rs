//! Host extraction from HTTP request headers.

use axum::http::{HeaderMap, header};

/// Fallback when the client sent no Host header (HTTP/1.0 allows that).
const DEFAULT_HOST: &str = "localhost:5000";

/// Extracts the host (including any port) from the `Host` header.
///
/// The port is kept on purpose: the value is used verbatim to build short
/// links, which must stay clickable on non-standard ports.
pub fn extract_host(headers: &HeaderMap) -> String {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_HOST)
        .to_owned()
}

/// Reconstructs the externally visible base URL (`scheme://host`) of the
/// request, for building the short link shown to the user.
///
/// The scheme comes from `X-Forwarded-Proto` when a reverse proxy sets it
/// and defaults to `http` otherwise.
pub fn request_base_url(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .filter(|v| *v == "https")
        .unwrap_or("http");

    format!("{}://{}", scheme, extract_host(headers))
}
