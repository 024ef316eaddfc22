//! Application configuration loaded from environment variables.
//!
//! Configuration is resolved once at startup and passed explicitly to
//! [`crate::server::run`]; nothing is read from the environment after
//! that, and there is no process-global mutable state.
//!
//! ## Variables
//!
//! - `PORT` - Listen port (default: `5000`)
//! - `DATABASE_PATH` - SQLite database file (default: `shorturl.db`)
//! - `CODE_LENGTH` - Length of generated short codes (default: `6`)
//! - `MAX_GENERATION_ATTEMPTS` - Code-collision retry bound
//!   (default: `20`, floor: `10`)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: `5`)
//! - `RUST_LOG` - Log filter (default: `info`)

use std::env;

/// Lowest accepted retry bound; below this the service would give up on
/// code allocation too early to be meaningful.
const MIN_GENERATION_ATTEMPTS: u32 = 10;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub code_length: usize,
    pub max_generation_attempts: u32,
    pub db_max_connections: u32,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "shorturl.db".to_string());

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(6);

        let max_generation_attempts = env::var("MAX_GENERATION_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20)
            .max(MIN_GENERATION_ATTEMPTS);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            port,
            database_path,
            code_length,
            max_generation_attempts,
            db_max_connections,
            log_level,
        }
    }

    /// Socket address the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            database_path: "shorturl.db".to_string(),
            code_length: 6,
            max_generation_attempts: 20,
            db_max_connections: 5,
            log_level: "info".to_string(),
        }
    }
}
