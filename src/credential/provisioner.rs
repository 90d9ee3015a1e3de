//! Capture an API key and persist it to `.opentopography.txt`.

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use super::location::KeyLocation;
use super::source::SecretSource;
use crate::error::{OverlandError, Result};
use crate::utils::open_private_file;

/// Name of the file downstream notebooks read the key from.
pub const KEY_FILENAME: &str = ".opentopography.txt";

/// Prompt shown to the operator.
pub const KEY_PROMPT: &str = "Enter Your OpenTopography API Key: ";

/// Writes the OpenTopography API key into a single well-known file.
#[derive(Debug, Clone, Default)]
pub struct Provisioner {
    location: KeyLocation,
}

impl Provisioner {
    pub fn new(location: KeyLocation) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &KeyLocation {
        &self.location
    }

    /// Path the key file will be written to.
    pub fn key_path(&self) -> Result<PathBuf> {
        Ok(self.location.resolve()?.join(KEY_FILENAME))
    }

    /// Prompt for the key, write it, and return the path of the written file.
    ///
    /// Any previous contents are replaced. The directory is not created; if
    /// it is missing or unwritable the call fails and no file is left behind.
    pub fn provision<S: SecretSource + ?Sized>(&self, source: &mut S) -> Result<PathBuf> {
        let key_path = self.key_path()?;
        debug!(path = %key_path.display(), "provisioning OpenTopography API key");

        let key = source.read_secret(KEY_PROMPT).map_err(OverlandError::Input)?;

        // Old contents are only dropped once the handle is owner-only.
        let mut file = open_private_file(&key_path)?;
        file.set_len(0)
            .and_then(|_| file.write_all(key.as_bytes()))
            .map_err(|e| OverlandError::filesystem(&key_path, e))?;

        info!(path = %key_path.display(), bytes = key.len(), "API key file written");
        Ok(key_path)
    }
}

/// Human-readable confirmation printed after a successful write.
pub fn confirmation_message(path: &std::path::Path) -> String {
    format!("OpenTopography API Key file is created at {}.", path.display())
}
