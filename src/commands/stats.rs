//! Stats command - totals and storage usage

use crate::{MediacatError, library::Library, output};
use colored::Colorize;

type Result<T> = std::result::Result<T, MediacatError>;

/// Execute the stats command
///
/// Quiet mode prints tab separated `total images videos used limit` in bytes.
///
/// # Errors
/// Returns an error if the catalog or upload directory cannot be read.
pub fn execute(library: &Library, quiet: bool) -> Result<()> {
    let stats = library.stats()?;

    if quiet {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            stats.total,
            stats.images,
            stats.videos,
            stats.used_bytes,
            stats.quota.limit()
        );
        return Ok(());
    }

    let percent = stats.usage_ratio() * 100.0;
    let usage = format!("{percent:.1}%");
    let usage = if stats.quota.is_reached(stats.used_bytes) {
        usage.red()
    } else if percent >= 90.0 {
        usage.yellow()
    } else {
        usage.green()
    };

    println!("{}", "Catalog".bold());
    println!("  Items:     {}", stats.total);
    println!("  Images:    {}", stats.images);
    println!("  Videos:    {}", stats.videos);
    println!("{}", "Storage".bold());
    println!(
        "  Used:      {} of {} ({usage})",
        output::format_size_exact(stats.used_bytes),
        output::format_size_exact(stats.quota.limit()),
    );
    println!("  Available: {}", output::format_size_exact(stats.available_bytes()));
    Ok(())
}
