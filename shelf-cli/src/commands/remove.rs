//! Remove command implementation

use anyhow::Result;
use rustyline::DefaultEditor;
use shelf_core::Library;

use crate::render;
use crate::session::prompt;

use super::{book_at, is_yes};

/// Remove the book at the given card number, after confirmation
pub fn remove(editor: &mut DefaultEditor, library: &mut Library, number: usize) -> Result<()> {
    let Some(book) = book_at(library, number) else {
        println!("No card {} on the shelf.", number);
        return Ok(());
    };
    let id = book.id;
    let question = format!("Remove \"{}\" by {}? [y/N] ", book.title, book.author);

    let Some(answer) = prompt(editor, &question)? else {
        println!("Cancelled.");
        return Ok(());
    };
    if !is_yes(&answer) {
        println!("Cancelled.");
        return Ok(());
    }

    let removed = library.remove(id)?;
    tracing::debug!(%id, title = %removed.title, "removed book");

    println!("Removed \"{}\".", removed.title);
    println!();
    print!("{}", render::grid(library));
    Ok(())
}
