//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Handler-visible services, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteUrlRepository>>,
    pub stats_service: Arc<StatsService<SqliteUrlRepository>>,
}

impl AppState {
    /// Creates the application state from constructed services.
    pub fn new(
        link_service: Arc<LinkService<SqliteUrlRepository>>,
        stats_service: Arc<StatsService<SqliteUrlRepository>>,
    ) -> Self {
        Self {
            link_service,
            stats_service,
        }
    }
}
