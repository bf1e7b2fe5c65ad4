//! Export command - copy a stored file out of the library

use crate::{MediacatError, library::Library};
use std::path::Path;

type Result<T> = std::result::Result<T, MediacatError>;

/// Execute the export command
///
/// # Errors
/// Returns an error if the item is unknown or its file cannot be copied.
pub fn execute(library: &Library, id: u64, dest: &Path, quiet: bool) -> Result<()> {
    let written = library.export(id, dest)?;

    if quiet {
        println!("{}", written.display());
    } else {
        println!("Exported item #{id} to {}", written.display());
    }
    Ok(())
}
