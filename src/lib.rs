//! overland - tasks for the overland flow tutorial notebooks.
//!
//! This crate provides:
//! - Provisioning of the OpenTopography API key file (`.opentopography.txt`)
//!   that the notebooks read when fetching elevation data
//! - Thin wrappers that run the notebooks as tests, lint the repository and
//!   lock the Python requirements by delegating to external tools
//!
//! # Example
//!
//! ```no_run
//! use overland::credential::{KeyLocation, LineSource, Provisioner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provisioner = Provisioner::new(KeyLocation::CurrentDir);
//!     let path = provisioner.provision(&mut LineSource::stdio())?;
//!     println!("{}", overland::credential::confirmation_message(&path));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod credential;
pub mod error;
pub mod logging;
pub mod tasks;
pub mod utils;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use credential::{KeyLocation, Provisioner, SecretSource};
pub use error::{OverlandError, Result};
