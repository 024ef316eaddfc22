//! Random short code generation.

use rand::Rng;

/// Alphabet codes are drawn from: 26 lowercase + 26 uppercase + 10 digits.
pub const CODE_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates fixed-length random codes over [`CODE_ALPHABET`].
///
/// Each call draws characters uniformly and independently; two calls can
/// collide. Uniqueness against stored codes is the shortening service's
/// job, backed by the store's constraint.
#[derive(Debug, Clone, Copy)]
pub struct CodeGenerator {
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator producing codes of the given length.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Draws a fresh random code.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}
