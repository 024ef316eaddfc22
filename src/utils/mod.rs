//! Utility functions for code generation, URL processing, and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_normalizer`] - URL validation and canonicalization
//! - [`extract_host`] - Host extraction from HTTP headers

pub mod code_generator;
pub mod extract_host;
pub mod url_normalizer;
