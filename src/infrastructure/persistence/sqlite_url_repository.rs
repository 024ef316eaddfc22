//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, map_sqlx_error};

/// SQLite repository for short URL storage and retrieval.
///
/// All statements go through the shared connection pool; each call acquires
/// a connection for the duration of the statement and releases it on every
/// exit path.
pub struct SqliteUrlRepository {
    pool: SqlitePool,
}

impl SqliteUrlRepository {
    /// Creates a new repository backed by the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        sqlx::query_as::<_, ShortUrl>(
            r#"
            INSERT INTO urls (code, original_url, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, code, original_url, created_at, clicks
            "#,
        )
        .bind(&new_url.code)
        .bind(&new_url.original_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrl>(
            "SELECT id, code, original_url, created_at, clicks FROM urls WHERE code = ?1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrl>(
            "SELECT id, code, original_url, created_at, clicks FROM urls WHERE original_url = ?1",
        )
        .bind(original_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn resolve(&self, code: &str) -> Result<Option<String>, AppError> {
        // Single statement: the increment cannot be lost between a
        // separate read and write, even with concurrent resolvers.
        let original_url = sqlx::query_scalar::<_, String>(
            "UPDATE urls SET clicks = clicks + 1 WHERE code = ?1 RETURNING original_url",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(original_url)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
