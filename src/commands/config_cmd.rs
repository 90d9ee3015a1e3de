//! Config command handlers.

use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::error::{OverlandError, Result};

/// Handle `overland config <subcommand>`.
pub fn handle_config(config: &Config, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Generate { path, overwrite } => {
            let config_path = Config::generate_config_file(path, overwrite)?;
            println!("Config file generated at: {}", config_path.display());
        }
        ConfigCommands::List => {
            match Config::find_existing_config() {
                Some(path) => println!("Config file: {}", path.display()),
                None => println!("Config file: (none, using defaults)"),
            }
            println!();
            for (key, value) in config.settings() {
                println!("  {}: {}", key, value);
            }
        }
        ConfigCommands::Get { key } => {
            let value = config.get_setting(&key).map_err(OverlandError::validation)?;
            println!("{}", value);
        }
    }
    Ok(())
}
