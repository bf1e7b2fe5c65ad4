//! Search command - filter the catalog by text, kind and tag

use super::print_items;
use crate::{
    MediacatError,
    catalog::MediaKind,
    library::Library,
    search::{ALL, Query},
};

type Result<T> = std::result::Result<T, MediacatError>;

/// Execute the search command
///
/// Missing filters (or `all` for kind and tag) match everything. The kind may
/// also be given as `image` or `video` and is turned into its stored label.
///
/// # Errors
/// Returns an error for an unknown kind or if the catalog cannot be read.
pub fn execute(
    library: &Library,
    text: Option<&str>,
    kind: Option<&str>,
    tag: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let kind = match kind {
        None | Some(ALL) => None,
        Some(kind) => Some(
            kind.parse::<MediaKind>()
                .map_err(MediacatError::InvalidInput)?
                .label(),
        ),
    };
    let query = Query::from_parts(text, kind, tag);
    let items = library.search_query(&query)?;

    if items.is_empty() {
        if !quiet {
            println!("No items match the search.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Found {} item(s):", items.len());
    }
    print_items(library, &items, quiet);
    Ok(())
}
