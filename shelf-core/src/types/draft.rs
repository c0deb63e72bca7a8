//! Form input for a new book, before validation

use super::Book;
use crate::error::ValidationError;

/// Raw field values as entered in the add-book form
///
/// Nothing here is trimmed or parsed; [`BookDraft::build`] does that and
/// either produces a [`Book`] or reports the first invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    /// Title field
    pub title: String,

    /// Author field
    pub author: String,

    /// Pages field, still a string
    pub pages: String,

    /// Genre field, may be blank
    pub genre: String,

    /// Read checkbox
    pub read: bool,
}

impl BookDraft {
    /// Validate the draft and construct a book with a fresh id
    ///
    /// Title and author are trimmed and must be non-empty. Pages must parse
    /// as a whole number of at least 1. A blank genre becomes `None`.
    pub fn build(self) -> Result<Book, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let author = self.author.trim();
        if author.is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }

        let pages_field = self.pages.trim();
        let pages: u32 = pages_field
            .parse()
            .map_err(|_| ValidationError::InvalidPages(pages_field.to_string()))?;
        if pages == 0 {
            return Err(ValidationError::ZeroPages);
        }

        let genre = self.genre.trim();
        let genre = if genre.is_empty() {
            None
        } else {
            Some(genre.to_string())
        };

        Ok(Book::new(title, author, pages, genre, self.read))
    }
}
