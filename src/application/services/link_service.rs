//! Short link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;

/// Service turning normalized URLs into short codes and codes back into
/// URLs, enforcing dedup and code uniqueness.
pub struct LinkService<R: UrlRepository> {
    repository: Arc<R>,
    generator: CodeGenerator,
    max_attempts: u32,
}

impl<R: UrlRepository> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `generator` and `max_attempts` come from [`crate::config::Config`];
    /// the retry bound and code length are never hard-coded here.
    pub fn new(repository: Arc<R>, generator: CodeGenerator, max_attempts: u32) -> Self {
        Self {
            repository,
            generator,
            max_attempts,
        }
    }

    /// Shortens an already-normalized URL.
    ///
    /// # Deduplication
    ///
    /// If a record for the same URL already exists, returns it unchanged:
    /// no new row, no new code, same code on every repeat submission.
    ///
    /// # Code Generation
    ///
    /// Otherwise attempts up to `max_attempts` generate-and-insert cycles.
    /// A candidate that loses to an existing code fails at the store's
    /// uniqueness constraint and is discarded for a fresh draw; any other
    /// storage fault aborts immediately.
    ///
    /// The dedup check and the insert are not one transaction. Two
    /// concurrent first-time submissions of the same URL can both miss the
    /// check and insert two rows with different codes; both codes resolve.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeSpaceExhausted`] when every attempt
    /// collided, and [`AppError::Database`] on storage faults.
    pub async fn shorten(&self, original_url: &str) -> Result<ShortUrl, AppError> {
        if let Some(existing) = self.repository.find_by_original_url(original_url).await? {
            return Ok(existing);
        }

        for _ in 0..self.max_attempts {
            let candidate = self.generator.generate();

            match self
                .repository
                .insert(NewShortUrl {
                    code: candidate,
                    original_url: original_url.to_owned(),
                })
                .await
            {
                Ok(created) => return Ok(created),
                Err(AppError::CodeConflict) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolves a short code to its target URL, recording the visit.
    ///
    /// The click increment happens atomically with the lookup even though
    /// the caller only asked to read; resolution is defined as a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.repository
            .resolve(code)
            .await?
            .ok_or(AppError::NotFound)
    }
}
