//! Error types for the data layer.

use thiserror::Error;

/// Errors surfaced by email repositories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The inbox source could not produce the email list.
    #[error("inbox source unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias using [`RepositoryError`].
pub type Result<T> = std::result::Result<T, RepositoryError>;
