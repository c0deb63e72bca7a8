//! Interactive session loop: one process lifetime is one library session

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use shelf_core::Library;

use crate::commands;
use crate::render;

/// A parsed session command
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    List(ListFilter),
    Toggle(usize),
    Remove(usize),
    Stats,
    Seed,
    Export,
    Help,
    Quit,
}

/// Which books `list` should show
#[derive(Debug, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Read,
    Unread,
    Genre(String),
}

/// Parse one input line into a command
///
/// Returns a user-presentable message for anything unrecognized.
pub fn parse(line: &str) -> Result<Command, String> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().ok_or("Type 'help' for commands.")?;

    match command {
        "add" => Ok(Command::Add),
        "list" => match tokens.next() {
            None => Ok(Command::List(ListFilter::All)),
            Some("read") => Ok(Command::List(ListFilter::Read)),
            Some("unread") => Ok(Command::List(ListFilter::Unread)),
            Some("genre") => {
                let name = tokens.collect::<Vec<_>>().join(" ");
                if name.is_empty() {
                    Err("Usage: list genre <name>".to_string())
                } else {
                    Ok(Command::List(ListFilter::Genre(name)))
                }
            }
            Some(other) => Err(format!(
                "Unknown list filter '{}'. Try 'list', 'list read', 'list unread' or 'list genre <name>'.",
                other
            )),
        },
        "toggle" => parse_card_number(tokens.next(), "toggle").map(Command::Toggle),
        "remove" => parse_card_number(tokens.next(), "remove").map(Command::Remove),
        "stats" => Ok(Command::Stats),
        "seed" => Ok(Command::Seed),
        "export" => Ok(Command::Export),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command '{}'. Type 'help' for commands.", other)),
    }
}

fn parse_card_number(arg: Option<&str>, command: &str) -> Result<usize, String> {
    let arg = arg.ok_or_else(|| format!("Usage: {} <card number>", command))?;
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("'{}' is not a card number (card numbers start at 1).", arg)),
    }
}

/// Read one answer from the user
///
/// `None` means the prompt was abandoned with Ctrl-C or Ctrl-D, which
/// cancels the surrounding command without ending the session.
pub fn prompt(editor: &mut DefaultEditor, text: &str) -> Result<Option<String>> {
    match editor.readline(text) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// The interactive session: a line editor plus the session's library
pub struct Session {
    editor: DefaultEditor,
    library: Library,
}

impl Session {
    /// Create a session, optionally pre-populated with the sample books
    pub fn new(seed: bool) -> Result<Self> {
        let mut library = Library::new();
        if seed {
            let added = commands::seed_books(&mut library)?;
            tracing::debug!(added, "seeded library");
        }
        Ok(Self {
            editor: DefaultEditor::new()?,
            library,
        })
    }

    /// Run the read-eval loop until quit or end of input
    pub fn run(mut self) -> Result<()> {
        println!("Shelf - personal book library (type 'help' for commands)");
        println!();
        print!("{}", render::grid(&self.library));

        loop {
            let line = match self.editor.readline("shelf> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            self.editor.add_history_entry(line)?;

            match parse(line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command)?,
                Err(message) => println!("{}", message),
            }
        }

        tracing::debug!(books = self.library.len(), "session ended");
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Add => commands::add(&mut self.editor, &mut self.library),
            Command::List(filter) => commands::list(&self.library, &filter),
            Command::Toggle(number) => commands::toggle(&mut self.library, number),
            Command::Remove(number) => commands::remove(&mut self.editor, &mut self.library, number),
            Command::Stats => commands::stats(&self.library),
            Command::Seed => commands::seed(&mut self.library),
            Command::Export => commands::export(&self.library),
            Command::Help => {
                print_help();
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add                 Add a book (prompts for each field)");
    println!("  list                Show all books");
    println!("  list read           Show only read books");
    println!("  list unread         Show only unread books");
    println!("  list genre <name>   Show books in a genre");
    println!("  toggle <n>          Toggle read-status of card n");
    println!("  remove <n>          Remove card n (asks for confirmation)");
    println!("  stats               Show library totals");
    println!("  seed                Add a few sample books");
    println!("  export              Print the library as JSON");
    println!("  quit                End the session");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("add"), Ok(Command::Add));
        assert_eq!(parse("stats"), Ok(Command::Stats));
        assert_eq!(parse("seed"), Ok(Command::Seed));
        assert_eq!(parse("export"), Ok(Command::Export));
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("quit"), Ok(Command::Quit));
        assert_eq!(parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_list_filters() {
        assert_eq!(parse("list"), Ok(Command::List(ListFilter::All)));
        assert_eq!(parse("list read"), Ok(Command::List(ListFilter::Read)));
        assert_eq!(parse("list unread"), Ok(Command::List(ListFilter::Unread)));
        assert_eq!(
            parse("list genre Science Fiction"),
            Ok(Command::List(ListFilter::Genre("Science Fiction".into())))
        );
        assert!(parse("list genre").is_err());
        assert!(parse("list everything").is_err());
    }

    #[test]
    fn test_parse_card_numbers() {
        assert_eq!(parse("toggle 3"), Ok(Command::Toggle(3)));
        assert_eq!(parse("remove 1"), Ok(Command::Remove(1)));
        assert!(parse("toggle").is_err());
        assert!(parse("toggle zero").is_err());
        assert!(parse("remove 0").is_err());
        assert!(parse("remove -1").is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        let message = parse("frobnicate").unwrap_err();
        assert!(message.contains("frobnicate"));
        assert!(message.contains("help"));
    }
}
