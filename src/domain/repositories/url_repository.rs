//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for stored short URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record; the store assigns `id`, `created_at` and a
    /// zero click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] if the code is already taken.
    /// Uniqueness is enforced by the store itself, so a concurrent insert
    /// of the same code fails here atomically rather than racing.
    ///
    /// Returns [`AppError::Database`] on other database errors.
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by its short code (exact match).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Finds the record previously created for this exact original URL.
    ///
    /// Used by the shortening service's dedup check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError>;

    /// Looks up `code` and increments its click counter in one atomic
    /// statement, returning the target URL.
    ///
    /// A miss returns `None` and leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn resolve(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Total number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
