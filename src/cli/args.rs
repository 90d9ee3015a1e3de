//! CLI argument parsing structures.

use clap::{ArgAction, Args, Parser};
use std::path::PathBuf;

use super::commands::Commands;

/// Main CLI structure for overland.
#[derive(Parser, Debug)]
#[command(name = "overland")]
#[command(about = "Tasks for the overland flow tutorial notebooks", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments available to all commands.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Config file to use instead of searching for overland.kdl
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}
