//! URL validation and canonicalization.
//!
//! Turns raw form input into an acceptable absolute URL, inferring the
//! `https` scheme when the user left it out.

use url::{ParseError, Url};

/// Reasons a submitted URL is rejected.
///
/// Rejection is an expected, frequent outcome and is always signalled
/// through the `Result` value, never through a panic or HTTP fault.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL is empty")]
    EmptyInput,

    #[error("URL contains whitespace")]
    EmbeddedWhitespace,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedScheme,

    #[error("URL has no host")]
    MissingHost,
}

/// Normalizes raw user input into an absolute `http`/`https` URL.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed; an empty result is rejected
/// 2. Whitespace anywhere inside the trimmed input is rejected
/// 3. Input without a scheme gets `https://` prepended before re-parsing
/// 4. Only `http` and `https` are accepted, and the host must be non-empty
///
/// The returned string is the trimmed input itself (plus the inferred
/// scheme prefix when one was added), not a re-serialized URL, so
/// `normalize_url("example.com")` yields exactly `https://example.com`.
/// The function is pure and idempotent over its own output.
///
/// # Errors
///
/// Returns the matching [`UrlNormalizationError`] variant for each
/// rejection rule above.
pub fn normalize_url(raw: &str) -> Result<String, UrlNormalizationError> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return Err(UrlNormalizationError::EmptyInput);
    }

    if cleaned.chars().any(char::is_whitespace) {
        return Err(UrlNormalizationError::EmbeddedWhitespace);
    }

    let (canonical, parsed) = match Url::parse(cleaned) {
        Ok(url) => (cleaned.to_owned(), url),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let prefixed = format!("https://{cleaned}");
            let url = Url::parse(&prefixed)
                .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;
            (prefixed, url)
        }
        Err(e) => return Err(UrlNormalizationError::InvalidFormat(e.to_string())),
    };

    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedScheme),
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    Ok(canonical)
}
