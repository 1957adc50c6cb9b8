//! Errors raised by the generators.
//!
//! `Range` errors are caller bugs: a parameter broke a documented bound.
//! `Format` errors come from untrusted wordlist content. Neither is retried.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Out of range: {0}")]
    Range(String),
    #[error("Invalid format: {0}")]
    Format(String),
    #[error("Entropy source failed: {0}")]
    Entropy(String),
}

impl GenerateError {
    pub(crate) fn range(what: &str, value: usize, min: usize, max: usize) -> Self {
        Self::Range(format!("{what} must be between {min} and {max}, got {value}"))
    }

    /// Whether the error was caused by a bad parameter rather than bad input.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }

    /// Whether the error was caused by malformed wordlist content.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

impl From<rand::Error> for GenerateError {
    fn from(e: rand::Error) -> Self {
        Self::Entropy(e.to_string())
    }
}
