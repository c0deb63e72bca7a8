//! Stats command implementation

use anyhow::Result;
use shelf_core::Library;

use crate::render;

/// Show aggregate counts for the session's library
pub fn stats(library: &Library) -> Result<()> {
    print!("{}", render::stats(&library.stats()));
    Ok(())
}
