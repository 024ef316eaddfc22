//! Short URL entity representing a stored code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored short URL record: one row per unique original URL.
///
/// `code` and `created_at` are immutable once assigned; `clicks` starts at
/// zero and only ever grows.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShortUrl {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl ShortUrl {
    /// Creates a new `ShortUrl` instance.
    pub fn new(
        id: i64,
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            id,
            code,
            original_url,
            created_at,
            clicks,
        }
    }
}

/// Input data for inserting a new short URL.
///
/// `id`, `created_at` and the zero click counter are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub code: String,
    pub original_url: String,
}
