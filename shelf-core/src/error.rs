//! Error types for Shelf Core

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for all library operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShelfError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("A book with id {0} is already in the library")]
    DuplicateBook(Uuid),

    #[error("No book with id {0} in the library")]
    BookNotFound(Uuid),
}

/// Errors that occur while validating form input for a new book
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Author must not be empty")]
    EmptyAuthor,

    #[error("Pages must be a whole number, got '{0}'")]
    InvalidPages(String),

    #[error("Pages must be at least 1")]
    ZeroPages,
}
