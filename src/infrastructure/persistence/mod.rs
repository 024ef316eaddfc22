//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//!
//! - [`SqliteUrlRepository`] - Short URL storage, lookup, and click accounting

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
