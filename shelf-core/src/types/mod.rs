//! Core types for the Shelf library model

mod book;
mod draft;

pub use book::Book;
pub use draft::BookDraft;
