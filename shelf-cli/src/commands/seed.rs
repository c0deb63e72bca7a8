//! Seed command implementation

use anyhow::Result;
use shelf_core::{Book, Library};

use crate::render;

/// Sample books for a fresh session
const SAMPLES: &[(&str, &str, u32, Option<&str>, bool)] = &[
    ("The Hobbit", "J.R.R. Tolkien", 310, Some("Fantasy"), true),
    ("Dune", "Frank Herbert", 412, Some("Science Fiction"), false),
    ("The Left Hand of Darkness", "Ursula K. Le Guin", 304, Some("Science Fiction"), true),
    ("The Pragmatic Programmer", "Andrew Hunt", 352, Some("Programming"), false),
];

/// Add the sample books, skipping titles already on the shelf
///
/// Returns how many were added. Re-seeding mid-session is a no-op.
pub fn seed_books(library: &mut Library) -> Result<usize> {
    let mut added = 0;
    for &(title, author, pages, genre, read) in SAMPLES {
        if library.books().iter().any(|b| b.title == title) {
            continue;
        }
        library.add(Book::new(title, author, pages, genre.map(String::from), read))?;
        added += 1;
    }
    Ok(added)
}

/// Seed the library and re-render the grid
pub fn seed(library: &mut Library) -> Result<()> {
    let added = seed_books(library)?;
    if added == 0 {
        println!("Sample books are already on the shelf.");
        return Ok(());
    }

    println!("Added {} sample books.", added);
    println!();
    print!("{}", render::grid(library));
    Ok(())
}
