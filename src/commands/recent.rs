//! Recent command - newest uploads first

use super::print_items;
use crate::{MediacatError, library::Library};

type Result<T> = std::result::Result<T, MediacatError>;

/// Execute the recent command
///
/// # Errors
/// Returns an error if the catalog cannot be read.
pub fn execute(library: &Library, limit: usize, quiet: bool) -> Result<()> {
    let items = library.recent(limit)?;

    if items.is_empty() {
        if !quiet {
            println!("No uploads yet.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Recent uploads:");
    }
    print_items(library, &items, quiet);
    Ok(())
}
