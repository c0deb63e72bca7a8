//! Session command implementations

mod add;
mod export;
mod list;
mod remove;
mod seed;
mod stats;
mod toggle;

pub use add::add;
pub use export::export;
pub use list::list;
pub use remove::remove;
pub use seed::{seed, seed_books};
pub use stats::stats;
pub use toggle::toggle;

use shelf_core::{Book, Library};

/// Look up a book by its 1-based card number in the full grid
pub(crate) fn book_at(library: &Library, number: usize) -> Option<&Book> {
    library.books().get(number.checked_sub(1)?)
}

/// Interpret a confirmation answer; anything but yes declines
pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
