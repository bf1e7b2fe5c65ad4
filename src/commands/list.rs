//! List command - show every item in the catalog

use super::print_items;
use crate::{MediacatError, library::Library};

type Result<T> = std::result::Result<T, MediacatError>;

/// Execute the list command
///
/// # Errors
/// Returns an error if the catalog cannot be read.
pub fn execute(library: &Library, quiet: bool) -> Result<()> {
    let items = library.list_items()?;

    if items.is_empty() {
        if !quiet {
            println!("No items in the catalog.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Items in catalog ({}):", items.len());
    }
    print_items(library, &items, quiet);
    Ok(())
}
