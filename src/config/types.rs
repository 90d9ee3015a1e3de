//! Configuration type definitions.

use knuffel::Decode;
use std::path::PathBuf;

/// Default pytest kernel for notebook execution.
const DEFAULT_KERNEL: &str = "python3";
/// Default per-notebook timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 3000;
/// Default pytest-xdist worker count.
const DEFAULT_WORKERS: &str = "auto";
/// Default pytest verbosity (number of `v` in `-vvv`).
const DEFAULT_VERBOSITY: u8 = 3;
const DEFAULT_NBMAKE: &str = "git+https://github.com/mcflugen/nbmake.git@mcflugen/add-markers";
const DEFAULT_REQUIREMENTS_IN: &str = "requirements.in";
const DEFAULT_REQUIREMENTS_TXT: &str = "requirements.txt";

/// Keys accepted by `overland config get`.
pub const SETTING_KEYS: &[&str] = &[
    "key_dir",
    "hidden",
    "kernel",
    "timeout",
    "workers",
    "verbosity",
    "nbmake",
    "requirements",
    "lock_input",
    "lock_output",
    "lock_upgrade",
];

/// Expand tilde (~) prefix to the user's home directory.
/// Handles both "~" alone and "~/path/to/something" patterns.
pub(crate) fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Main configuration structure parsed from overland.kdl.
#[derive(Debug, Decode, Clone, Default)]
pub struct Config {
    #[knuffel(child)]
    pub defaults: Option<Defaults>,

    #[knuffel(child)]
    pub notebooks: Option<NotebookSettings>,

    #[knuffel(child)]
    pub lock: Option<LockSettings>,
}

/// Settings for API key provisioning.
#[derive(Debug, Decode, Clone, Default)]
pub struct Defaults {
    /// Directory for `.opentopography.txt`: ".", "~" or a path.
    #[knuffel(property(name = "key_dir"))]
    pub key_dir: Option<String>,

    /// Read the key without echoing it to the terminal.
    #[knuffel(property)]
    pub hidden: Option<bool>,
}

/// Settings for the notebook test task.
#[derive(Debug, Decode, Clone, Default)]
pub struct NotebookSettings {
    #[knuffel(property)]
    pub kernel: Option<String>,

    /// Seconds before nbmake gives up on a notebook.
    #[knuffel(property)]
    pub timeout: Option<u64>,

    /// Worker count passed to pytest-xdist, "auto" or a number.
    #[knuffel(property)]
    pub workers: Option<String>,

    #[knuffel(property)]
    pub verbosity: Option<u8>,

    /// pip requirement spec for the nbmake plugin.
    #[knuffel(child, unwrap(argument))]
    pub nbmake: Option<String>,

    #[knuffel(child, unwrap(argument))]
    pub requirements: Option<String>,
}

/// Settings for the dependency lock task.
#[derive(Debug, Decode, Clone, Default)]
pub struct LockSettings {
    #[knuffel(property)]
    pub input: Option<String>,

    #[knuffel(property)]
    pub output: Option<String>,

    #[knuffel(property)]
    pub upgrade: Option<bool>,
}

impl Config {
    /// Get the key directory setting, defaulting to "."
    pub fn key_dir(&self) -> String {
        self.defaults
            .as_ref()
            .and_then(|d| d.key_dir.clone())
            .unwrap_or_else(|| ".".into())
    }

    /// Whether key input should be hidden, defaulting to false
    pub fn hidden(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.hidden)
            .unwrap_or(false)
    }

    pub fn kernel(&self) -> String {
        self.notebooks
            .as_ref()
            .and_then(|n| n.kernel.clone())
            .unwrap_or_else(|| DEFAULT_KERNEL.into())
    }

    /// Notebook timeout in seconds, defaulting to 3000
    pub fn timeout(&self) -> u64 {
        self.notebooks
            .as_ref()
            .and_then(|n| n.timeout)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn workers(&self) -> String {
        self.notebooks
            .as_ref()
            .and_then(|n| n.workers.clone())
            .unwrap_or_else(|| DEFAULT_WORKERS.into())
    }

    pub fn verbosity(&self) -> u8 {
        self.notebooks
            .as_ref()
            .and_then(|n| n.verbosity)
            .unwrap_or(DEFAULT_VERBOSITY)
    }

    pub fn nbmake(&self) -> String {
        self.notebooks
            .as_ref()
            .and_then(|n| n.nbmake.clone())
            .unwrap_or_else(|| DEFAULT_NBMAKE.into())
    }

    /// Requirements file installed before running notebooks
    pub fn requirements(&self) -> PathBuf {
        self.notebooks
            .as_ref()
            .and_then(|n| n.requirements.clone())
            .map(|p| expand_tilde(&p))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REQUIREMENTS_IN))
    }

    pub fn lock_input(&self) -> PathBuf {
        self.lock
            .as_ref()
            .and_then(|l| l.input.clone())
            .map(|p| expand_tilde(&p))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REQUIREMENTS_IN))
    }

    pub fn lock_output(&self) -> PathBuf {
        self.lock
            .as_ref()
            .and_then(|l| l.output.clone())
            .map(|p| expand_tilde(&p))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REQUIREMENTS_TXT))
    }

    /// Whether pip-compile upgrades pinned versions, defaulting to true
    pub fn lock_upgrade(&self) -> bool {
        self.lock.as_ref().and_then(|l| l.upgrade).unwrap_or(true)
    }

    /// Get a setting value as string
    pub fn get_setting(&self, key: &str) -> Result<String, String> {
        let value = match key {
            "key_dir" => self.key_dir(),
            "hidden" => self.hidden().to_string(),
            "kernel" => self.kernel(),
            "timeout" => self.timeout().to_string(),
            "workers" => self.workers(),
            "verbosity" => self.verbosity().to_string(),
            "nbmake" => self.nbmake(),
            "requirements" => self.requirements().to_string_lossy().to_string(),
            "lock_input" => self.lock_input().to_string_lossy().to_string(),
            "lock_output" => self.lock_output().to_string_lossy().to_string(),
            "lock_upgrade" => self.lock_upgrade().to_string(),
            _ => {
                return Err(format!(
                    "Unknown setting: {}. Valid settings: {}",
                    key,
                    SETTING_KEYS.join(", ")
                ));
            }
        };
        Ok(value)
    }

    /// All settings with their effective values, in display order
    pub fn settings(&self) -> Vec<(&'static str, String)> {
        SETTING_KEYS
            .iter()
            .filter_map(|key| self.get_setting(key).ok().map(|v| (*key, v)))
            .collect()
    }
}
