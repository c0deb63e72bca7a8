//! Text rendering for the card grid, single cards, and stats

use shelf_core::{Book, Library, LibraryStats};

/// Inner width of a card, between the border columns
const CARD_WIDTH: usize = 40;

/// Truncate to the card width, marking cut-off text with an ellipsis
fn clip(text: &str) -> String {
    let count = text.chars().count();
    if count <= CARD_WIDTH {
        text.to_string()
    } else {
        let head: String = text.chars().take(CARD_WIDTH - 3).collect();
        format!("{}...", head)
    }
}

fn card_line(text: &str) -> String {
    format!("| {:<width$} |\n", clip(text), width = CARD_WIDTH)
}

/// Render one book as a bordered card with its grid number
pub fn card(number: usize, book: &Book) -> String {
    let header = format!("+- {} ", number);
    let mut out = format!("{}{}+\n", header, "-".repeat(CARD_WIDTH + 3 - header.len()));

    out.push_str(&card_line(&book.title));
    out.push_str(&card_line(&book.formatted_author()));

    let pages = match &book.genre {
        Some(genre) => format!("{} pages - {}", book.pages, genre),
        None => format!("{} pages", book.pages),
    };
    out.push_str(&card_line(&pages));
    out.push_str(&card_line(&format!("[{}]", book.status_text())));

    out.push_str(&format!("+{}+\n", "-".repeat(CARD_WIDTH + 2)));
    out
}

/// Render numbered cards for a selection of books
///
/// Numbers are the books' positions in the full grid, so a filtered list
/// still shows the numbers `toggle` and `remove` expect.
pub fn cards<'a>(items: impl IntoIterator<Item = (usize, &'a Book)>) -> String {
    let mut out = String::new();
    let mut any = false;
    for (number, book) in items {
        any = true;
        out.push_str(&card(number, book));
    }
    if !any {
        out.push_str("Nothing here.\n");
    }
    out
}

/// Render the whole library as a numbered card grid
pub fn grid(library: &Library) -> String {
    if library.is_empty() {
        return "The shelf is empty. Type 'add' to add your first book.\n".to_string();
    }
    cards(library.books().iter().enumerate().map(|(i, b)| (i + 1, b)))
}

/// Render the aggregate stats block
pub fn stats(stats: &LibraryStats) -> String {
    format!(
        "Books:       {}\n\
         Read:        {}\n\
         Unread:      {}\n\
         Total pages: {}\n\
         Pages read:  {}\n",
        stats.total, stats.read, stats.unread, stats.total_pages, stats.pages_read
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::Book;

    fn book(title: &str, genre: Option<&str>, read: bool) -> Book {
        Book::new(title, "Author", 123, genre.map(String::from), read)
    }

    #[test]
    fn test_card_contents() {
        let rendered = card(2, &book("The Hobbit", Some("Fantasy"), false));
        assert!(rendered.contains("+- 2 "));
        assert!(rendered.contains("The Hobbit"));
        assert!(rendered.contains("By Author"));
        assert!(rendered.contains("123 pages - Fantasy"));
        assert!(rendered.contains("[Unread]"));
    }

    #[test]
    fn test_card_without_genre() {
        let rendered = card(1, &book("Dune", None, true));
        assert!(rendered.contains("123 pages"));
        assert!(!rendered.contains(" - "));
        assert!(rendered.contains("[Read]"));
    }

    #[test]
    fn test_long_title_is_clipped() {
        let long = "A".repeat(CARD_WIDTH * 2);
        let rendered = card(1, &book(&long, None, false));
        assert!(rendered.contains("..."));
        for line in rendered.lines() {
            assert!(line.chars().count() <= CARD_WIDTH + 4);
        }
    }

    #[test]
    fn test_empty_grid_placeholder() {
        let library = shelf_core::Library::new();
        assert!(grid(&library).contains("The shelf is empty"));
    }

    #[test]
    fn test_stats_block() {
        let mut library = shelf_core::Library::new();
        library.add(book("A", None, true)).unwrap();
        library.add(book("B", None, false)).unwrap();
        let rendered = stats(&library.stats());
        assert!(rendered.contains("Books:       2"));
        assert!(rendered.contains("Read:        1"));
        assert!(rendered.contains("Total pages: 246"));
        assert!(rendered.contains("Pages read:  123"));
    }
}
