//! Add command - upload a media file into the catalog

use crate::{
    MediacatError,
    library::{Library, Upload},
    output,
};
use colored::Colorize;
use std::path::Path;

type Result<T> = std::result::Result<T, MediacatError>;

/// Execute the add command
///
/// # Errors
/// Returns an error if the file cannot be read or the library rejects it.
pub fn execute(
    library: &Library,
    file: &Path,
    title: &str,
    tags: &str,
    description: Option<&str>,
    content_type: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let mut upload = Upload::from_path(file)?;
    if let Some(content_type) = content_type {
        upload = upload.with_content_type(content_type);
    }

    let item = library
        .add_item(title, tags, description, &upload)
        .inspect_err(|e| {
            if e.is_validation() && !quiet {
                eprintln!("{} {}", "Rejected:".red(), file.display());
            }
        })?;

    if quiet {
        println!("{}", item.id);
    } else {
        println!("{} {}", "Added".green(), output::item_line(&item, library.file_status(&item), false).trim_start());
    }
    Ok(())
}
