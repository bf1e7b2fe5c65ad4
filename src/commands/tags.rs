//! Tags command - list every tag with its usage count

use crate::{MediacatError, library::Library, output};

type Result<T> = std::result::Result<T, MediacatError>;

/// Execute the tags command
///
/// # Errors
/// Returns an error if the catalog cannot be read.
pub fn execute(library: &Library, quiet: bool) -> Result<()> {
    let counts = library.tag_counts()?;

    if counts.is_empty() {
        if !quiet {
            println!("No tags found in catalog.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags in catalog:");
    }
    for (tag, count) in counts {
        println!("{}", output::tag_with_count(&tag, count, quiet));
    }
    Ok(())
}
