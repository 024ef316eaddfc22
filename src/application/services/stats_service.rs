//! Aggregate statistics service.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Read-only statistics over the stored records.
pub struct StatsService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> StatsService<R> {
    /// Creates a new stats service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Total number of shortened URLs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
