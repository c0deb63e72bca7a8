//! Shelf Core Library
//!
//! This crate provides the data model for the Shelf personal book-library
//! manager: the `Book` record, the `BookDraft` form input with its
//! validation, and the in-memory `Library` collection. All state is
//! session-scoped; nothing here touches the filesystem.

pub mod error;
pub mod library;
pub mod types;

pub use error::{Result, ShelfError, ValidationError};
pub use library::{Library, LibraryStats};
pub use types::{Book, BookDraft};
