//! Command and subcommand definitions.

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Top-level commands available in overland.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for an OpenTopography API key and save it to .opentopography.txt
    InstallApiKey(KeyArgs),
    /// Run the notebooks as tests with pytest and nbmake
    Test(TestArgs),
    /// Look for lint with pre-commit
    Lint {
        /// Skip installing pre-commit
        #[arg(long)]
        no_install: bool,
    },
    /// Regenerate requirements.txt from requirements.in
    Lock(LockArgs),
    /// Run lint, lock and test in order, stopping at the first failure
    All {
        /// Skip installing tools before each task
        #[arg(long)]
        no_install: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug, Default)]
pub struct KeyArgs {
    /// Directory to write the key file into (default: current directory)
    #[arg(long, value_name = "DIR", conflicts_with = "home")]
    pub dir: Option<PathBuf>,

    /// Write the key file into your home directory
    #[arg(long)]
    pub home: bool,

    /// Do not echo the key while typing
    #[arg(long)]
    pub hidden: bool,
}

#[derive(Args, Debug, Default)]
pub struct TestArgs {
    /// Notebooks or directories to run (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Seconds to wait for each notebook
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Parallel workers: "auto" or a number
    #[arg(short = 'n', long, value_name = "N")]
    pub workers: Option<String>,

    /// Jupyter kernel to execute notebooks with
    #[arg(long)]
    pub kernel: Option<String>,

    /// Skip installing pytest, nbmake and requirements
    #[arg(long)]
    pub no_install: bool,

    /// Extra arguments passed through to pytest
    #[arg(last = true)]
    pub extra: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct LockArgs {
    /// Unpinned requirements file
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Pinned requirements file to write
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Keep existing pins instead of upgrading
    #[arg(long)]
    pub no_upgrade: bool,

    /// Skip installing pip-tools
    #[arg(long)]
    pub no_install: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate a new config file
    Generate {
        /// Path where to create the config file (default: ./overland.kdl)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite existing config file if it exists
        #[arg(long)]
        overwrite: bool,
    },
    /// List all configuration settings
    List,
    /// Get a specific configuration value
    Get {
        /// Setting key (e.g., "key_dir", "timeout", "workers")
        key: String,
    },
}
