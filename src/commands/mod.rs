//! Command handlers for the overland CLI.
//!
//! Task handlers return the exit code of the delegated tool so `main` can
//! exit with it unchanged.

mod config_cmd;
mod install_key;
mod tasks;

pub use config_cmd::handle_config;
pub use install_key::{handle_install_api_key, install_api_key, key_location, use_hidden_input};
pub use tasks::{handle_all, handle_lint, handle_lock, handle_test, lock_options, test_options};
