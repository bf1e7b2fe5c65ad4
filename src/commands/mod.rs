//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the library.

pub mod add;
pub mod config;
pub mod export;
pub mod list;
pub mod recent;
pub mod search;
pub mod stats;
pub mod tags;

use crate::catalog::Item;
use crate::library::Library;
use crate::output;

// Re-export execute functions for convenience
pub use add::execute as add;
pub use config::execute as config;
pub use export::execute as export;
pub use list::execute as list;
pub use recent::execute as recent;
pub use search::execute as search;
pub use stats::execute as stats;
pub use tags::execute as tags;

/// Print items one per line, with descriptions unless quiet
fn print_items(library: &Library, items: &[Item], quiet: bool) {
    for item in items {
        println!("{}", output::item_line(item, library.file_status(item), quiet));
        if !quiet && let Some(block) = output::description_block(item) {
            println!("{block}");
        }
    }
}
