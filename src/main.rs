use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use overland::cli::{Cli, Commands};
use overland::commands::{
    handle_all, handle_config, handle_install_api_key, handle_lint, handle_lock, handle_test,
};
use overland::{Config, Result, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    match run(cli) {
        Ok(code) => exit_code(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = match &cli.global.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::InstallApiKey(args) => {
            handle_install_api_key(&config, &args)?;
            Ok(0)
        }
        Commands::Test(args) => handle_test(&config, args),
        Commands::Lint { no_install } => handle_lint(no_install),
        Commands::Lock(args) => handle_lock(&config, args),
        Commands::All { no_install } => handle_all(&config, no_install),
        Commands::Config { command } => {
            handle_config(&config, command)?;
            Ok(0)
        }
    }
}

/// Exit with the delegated tool's code, clamped to what the platform accepts.
fn exit_code(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}
