//! Add command implementation

use anyhow::Result;
use rustyline::DefaultEditor;
use shelf_core::{BookDraft, Library, ValidationError};

use crate::render;
use crate::session::prompt;

use super::is_yes;

/// Prompt for each form field, validate, and add the book
///
/// Validation failures re-prompt the offending field with the error
/// message, like an inline form message. Abandoning any prompt cancels
/// the whole command and leaves the library unchanged.
pub fn add(editor: &mut DefaultEditor, library: &mut Library) -> Result<()> {
    let Some(title) = prompt(editor, "Title: ")? else {
        return cancelled();
    };
    let Some(author) = prompt(editor, "Author: ")? else {
        return cancelled();
    };
    let Some(pages) = prompt(editor, "Pages: ")? else {
        return cancelled();
    };
    let Some(genre) = prompt(editor, "Genre (optional): ")? else {
        return cancelled();
    };
    let Some(read_answer) = prompt(editor, "Read it already? [y/N] ")? else {
        return cancelled();
    };

    let mut draft = BookDraft {
        title,
        author,
        pages,
        genre,
        read: is_yes(&read_answer),
    };

    loop {
        match draft.clone().build() {
            Ok(book) => {
                tracing::debug!(id = %book.id, title = %book.title, "adding book");
                let title = book.title.clone();
                library.add(book)?;

                println!("Added \"{}\".", title);
                println!();
                print!("{}", render::grid(library));
                return Ok(());
            }
            Err(error @ ValidationError::EmptyTitle) => {
                println!("{}", error);
                let Some(title) = prompt(editor, "Title: ")? else {
                    return cancelled();
                };
                draft.title = title;
            }
            Err(error @ ValidationError::EmptyAuthor) => {
                println!("{}", error);
                let Some(author) = prompt(editor, "Author: ")? else {
                    return cancelled();
                };
                draft.author = author;
            }
            Err(error) => {
                println!("{}", error);
                let Some(pages) = prompt(editor, "Pages: ")? else {
                    return cancelled();
                };
                draft.pages = pages;
            }
        }
    }
}

fn cancelled() -> Result<()> {
    println!("Cancelled.");
    Ok(())
}
