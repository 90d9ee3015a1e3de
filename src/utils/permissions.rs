//! Owner-only permissions for files that hold credentials.

use std::fs::{File, OpenOptions};
use std::path::Path;

use crate::error::{OverlandError, Result};

/// Open a file for writing with owner-only read/write permissions.
///
/// A new file is created with mode 0o600, and an existing file is switched
/// to 0o600 before anything is written to it. Existing contents are left in
/// place; the caller truncates once the handle is private. On non-Unix
/// platforms the permission model differs and only the open happens.
pub fn open_private_file(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(false);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let file = options
        .open(path)
        .map_err(|e| OverlandError::filesystem(path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .map_err(|e| OverlandError::filesystem(path, e))?;
    }

    Ok(file)
}
