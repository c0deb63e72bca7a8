//! Export command implementation

use anyhow::{Context, Result};
use shelf_core::Library;

/// Print the session's library as pretty JSON
pub fn export(library: &Library) -> Result<()> {
    let json = serde_json::to_string_pretty(library).context("Failed to serialize library")?;
    println!("{}", json);
    Ok(())
}
