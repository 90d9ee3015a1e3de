//! Configuration file loading and generation.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::error::{OverlandError, Result};

const CONFIG_FILENAME: &str = "overland.kdl";

impl Config {
    /// Get the explicit ~/.config/overland/overland.kdl path (XDG-style, cross-platform)
    fn xdg_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config/overland").join(CONFIG_FILENAME))
    }

    /// Config file search paths in priority order
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILENAME)];

        if let Some(xdg_path) = Self::xdg_config_path() {
            paths.push(xdg_path);
        }

        // Skip the platform config dir when it is the same as the XDG path (Linux)
        if let Some(config_dir) = dirs::config_dir() {
            let native_path = config_dir.join("overland").join(CONFIG_FILENAME);
            if Self::xdg_config_path().as_ref() != Some(&native_path) {
                paths.push(native_path);
            }
        }

        paths
    }

    /// Find the first existing config file in the search paths
    pub fn find_existing_config() -> Option<PathBuf> {
        Self::search_paths().into_iter().find(|path| path.exists())
    }

    /// Parse configuration from KDL text
    pub fn parse(name: &str, content: &str) -> Result<Self> {
        knuffel::parse::<Config>(name, content).map_err(|e| OverlandError::config(e.to_string()))
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| OverlandError::filesystem(path, e))?;
        debug!(path = %path.display(), "loaded config file");
        Self::parse(&path.to_string_lossy(), &content)
    }

    /// Load configuration from overland.kdl, falling back to defaults if none exists
    pub fn load() -> Result<Self> {
        match Self::find_existing_config() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Write a config file containing the default values
    pub fn generate_config_file(path: Option<PathBuf>, overwrite: bool) -> Result<PathBuf> {
        let config_path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if config_path.exists() && !overwrite {
            return Err(OverlandError::validation(format!(
                "Config file already exists at: {}. Use --overwrite to replace it.",
                config_path.display()
            )));
        }

        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| OverlandError::filesystem(parent, e))?;
        }

        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| OverlandError::filesystem(&config_path, e))?;
        Ok(config_path)
    }
}

const DEFAULT_CONFIG: &str = r#"// overland configuration file

// key_dir is where .opentopography.txt is written: "." (working directory),
// "~" (home directory) or any path.
defaults key_dir="." hidden=false

// timeout is in seconds per notebook; workers is passed to pytest -n
notebooks kernel="python3" timeout=3000 workers="auto" verbosity=3 {
    nbmake "git+https://github.com/mcflugen/nbmake.git@mcflugen/add-markers"
    requirements "requirements.in"
}

lock input="requirements.in" output="requirements.txt" upgrade=true
"#;
