//! List command implementation

use anyhow::Result;
use shelf_core::Library;

use crate::render;
use crate::session::ListFilter;

/// Render cards matching the filter
///
/// Filtered views keep the books' full-grid numbers so `toggle <n>` and
/// `remove <n>` always mean the same card.
pub fn list(library: &Library, filter: &ListFilter) -> Result<()> {
    if library.is_empty() {
        print!("{}", render::grid(library));
        return Ok(());
    }

    let items: Vec<_> = library
        .books()
        .iter()
        .enumerate()
        .map(|(i, b)| (i + 1, b))
        .filter(|(_, b)| match filter {
            ListFilter::All => true,
            ListFilter::Read => b.read,
            ListFilter::Unread => !b.read,
            ListFilter::Genre(name) => b
                .genre
                .as_deref()
                .is_some_and(|g| g.eq_ignore_ascii_case(name)),
        })
        .collect();

    if items.is_empty() {
        if let ListFilter::Genre(name) = filter {
            let genres = library.genres();
            if genres.is_empty() {
                println!("No books in '{}'; nothing on the shelf has a genre yet.", name);
            } else {
                println!("No books in '{}'. Genres on the shelf: {}.", name, genres.join(", "));
            }
            return Ok(());
        }
    }

    print!("{}", render::cards(items));
    Ok(())
}
