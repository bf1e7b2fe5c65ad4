//! Mediacat CLI application entry point
//!
//! This is the main executable for the mediacat media catalog. It stores images
//! and videos under a quota and lets you list and search them by text, kind
//! and tag.
//!
//! # Usage
//!
//! ```bash
//! # List every item (default command)
//! mediacat
//! mediacat list
//!
//! # Add a file
//! mediacat add logo.png --title "Logo Azul" --tags "logo, 2024"
//!
//! # Search by text, kind and tag
//! mediacat search logo --kind Imagem --tag 2024
//!
//! # Storage usage
//! mediacat stats
//!
//! # Quiet mode (only output results)
//! mediacat -q search logo
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory (`~/.config/mediacat/config.toml`
//! on Linux) and can be overridden with `MEDIACAT_*` environment variables.
//! Log output is controlled by `MEDIACAT_LOG` (e.g. `MEDIACAT_LOG=debug`).

use mediacat::{
    MediacatError,
    cli::{Cli, Commands},
    commands,
    config::MediacatConfig,
    library::Library,
    logging,
};

type Result<T> = std::result::Result<T, MediacatError>;

/// Main entry point for the mediacat application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `MediacatError` if configuration loading fails, the library cannot
/// be opened, or any command handler returns an error.
fn main() -> Result<()> {
    let config = MediacatConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    logging::init(&config.log_level);

    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return commands::config(config, command, quiet);
    }

    let library = Library::open(&config)?;

    match command {
        Commands::Add {
            file,
            title,
            tags,
            description,
            content_type,
        } => commands::add(
            &library,
            &file,
            &title,
            &tags,
            description.as_deref(),
            content_type.as_deref(),
            quiet,
        ),
        Commands::List => commands::list(&library, quiet),
        Commands::Search { query, kind, tag } => {
            commands::search(&library, query.as_deref(), kind.as_deref(), tag.as_deref(), quiet)
        }
        Commands::Tags => commands::tags(&library, quiet),
        Commands::Stats => commands::stats(&library, quiet),
        Commands::Recent { limit } => commands::recent(&library, limit, quiet),
        Commands::Export { id, dest } => commands::export(&library, id, &dest, quiet),
        Commands::Config { .. } => unreachable!(),
    }
}
