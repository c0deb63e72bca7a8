//! The Book record - a single entry in the library

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single book record
///
/// The id is assigned at creation and never changes; every other field is
/// an ordinary mutable field, though the read flag is normally flipped
/// through [`Book::toggle_read`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier for this book
    pub id: Uuid,

    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Page count (always at least 1)
    pub pages: u32,

    /// Genre, if one was given
    pub genre: Option<String>,

    /// Whether the book has been read
    pub read: bool,

    /// When the book was added to the library
    pub added_at: DateTime<Utc>,
}

impl Book {
    /// Create a new book with a fresh id
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
        genre: Option<String>,
        read: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author: author.into(),
            pages,
            genre,
            read,
            added_at: Utc::now(),
        }
    }

    /// Flip the read flag and return the new value
    pub fn toggle_read(&mut self) -> bool {
        self.read = !self.read;
        self.read
    }

    /// Status label for display
    pub fn status_text(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }

    /// Author line for display
    pub fn formatted_author(&self) -> String {
        format!("By {}", self.author)
    }
}
