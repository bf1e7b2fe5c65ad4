//! Config command - read and change settings

use crate::{MediacatError, cli::ConfigCommands, config::MediacatConfig};

type Result<T> = std::result::Result<T, MediacatError>;

/// Execute a config subcommand
///
/// # Errors
/// Returns an error for a malformed `key=value`, an unknown key, a value that
/// does not parse, or if the config file cannot be written.
pub fn execute(mut config: MediacatConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                MediacatError::InvalidInput("Invalid format. Use: mediacat config set key=value".into())
            })?;
            let key = key.trim();

            config.set(key, value.trim())?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {}", config.get(key)?);
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get(key)?);
        }
        ConfigCommands::Path => {
            println!("{}", MediacatConfig::config_path()?.display());
        }
    }
    Ok(())
}
