//! Toggle command implementation

use anyhow::Result;
use shelf_core::Library;

use crate::render;

use super::book_at;

/// Flip the read-status of the book at the given card number
pub fn toggle(library: &mut Library, number: usize) -> Result<()> {
    let Some(book) = book_at(library, number) else {
        println!("No card {} on the shelf.", number);
        return Ok(());
    };
    let id = book.id;
    let title = book.title.clone();

    let read = library.toggle_read(id)?;
    tracing::debug!(%id, read, "toggled read-status");

    println!(
        "Marked \"{}\" as {}.",
        title,
        if read { "read" } else { "unread" }
    );
    println!();
    print!("{}", render::grid(library));
    Ok(())
}
