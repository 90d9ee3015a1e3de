//! Where the API key file is written.

use std::path::{Path, PathBuf};

use crate::error::{OverlandError, Result};

/// Directory that receives the key file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KeyLocation {
    /// The process working directory at resolution time.
    #[default]
    CurrentDir,
    /// The operator's home directory.
    Home,
    /// A directory given explicitly.
    Explicit(PathBuf),
}

impl KeyLocation {
    /// Build a location from a configured directory string.
    ///
    /// `"."` maps to the working directory and `"~"` to the home directory;
    /// anything else is taken as an explicit path with `~/` expanded.
    pub fn from_setting(value: &str) -> Self {
        match value {
            "" | "." => KeyLocation::CurrentDir,
            "~" => KeyLocation::Home,
            other => KeyLocation::Explicit(crate::config::expand_tilde(other)),
        }
    }

    /// Resolve to a concrete directory.
    pub fn resolve(&self) -> Result<PathBuf> {
        match self {
            KeyLocation::CurrentDir => std::env::current_dir()
                .map_err(|e| OverlandError::filesystem(Path::new("."), e)),
            KeyLocation::Home => dirs::home_dir()
                .ok_or_else(|| OverlandError::config("Could not find home directory")),
            KeyLocation::Explicit(path) => Ok(path.clone()),
        }
    }
}

impl From<PathBuf> for KeyLocation {
    fn from(path: PathBuf) -> Self {
        KeyLocation::Explicit(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_setting() {
        assert_eq!(KeyLocation::from_setting("."), KeyLocation::CurrentDir);
        assert_eq!(KeyLocation::from_setting(""), KeyLocation::CurrentDir);
        assert_eq!(KeyLocation::from_setting("~"), KeyLocation::Home);
        assert_eq!(
            KeyLocation::from_setting("/srv/notebooks"),
            KeyLocation::Explicit(PathBuf::from("/srv/notebooks"))
        );
    }

    #[test]
    fn test_resolve_current_dir() {
        let resolved = KeyLocation::CurrentDir.resolve().unwrap();
        assert_eq!(resolved, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_resolve_explicit_is_unchanged() {
        let dir = PathBuf::from("/tmp/work");
        assert_eq!(KeyLocation::from(dir.clone()).resolve().unwrap(), dir);
    }
}
