//! Unified error type for overland.
//!
//! All public APIs return `Result<T, OverlandError>`. Filesystem and input
//! failures keep the underlying `io::Error` so the operator sees exactly what
//! the platform reported.

use std::fmt;
use std::path::PathBuf;

/// The unified error type for all overland operations.
#[derive(Debug)]
pub enum OverlandError {
    // ── Filesystem ─────────────────────────────────────────────────────
    /// The target directory is missing or the file could not be written.
    Filesystem {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── User interaction ───────────────────────────────────────────────
    /// No usable input could be read from the operator.
    Input(std::io::Error),

    // ── Configuration ──────────────────────────────────────────────────
    /// KDL config file parsing or lookup error.
    Config(String),

    // ── External tasks ─────────────────────────────────────────────────
    /// An external tool could not be started.
    TaskSpawn {
        program: String,
        source: std::io::Error,
    },

    /// Writing user-facing output failed.
    Io(std::io::Error),

    /// A command-line or config value was rejected.
    Validation(String),
}

// ── Display ────────────────────────────────────────────────────────────

impl fmt::Display for OverlandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlandError::Filesystem { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
            OverlandError::Input(e) => write!(f, "could not read input: {}", e),
            OverlandError::Config(msg) => write!(f, "config error: {}", msg),
            OverlandError::TaskSpawn { program, source } => {
                write!(f, "failed to start '{}': {}", program, source)
            }
            OverlandError::Io(e) => write!(f, "{}", e),
            OverlandError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for OverlandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OverlandError::Filesystem { source, .. } => Some(source),
            OverlandError::Input(e) => Some(e),
            OverlandError::TaskSpawn { source, .. } => Some(source),
            OverlandError::Io(e) => Some(e),
            _ => None,
        }
    }
}

// ── From implementations for common error types ────────────────────────

impl From<std::io::Error> for OverlandError {
    fn from(e: std::io::Error) -> Self {
        OverlandError::Io(e)
    }
}

// ── Convenience constructors ───────────────────────────────────────────

impl OverlandError {
    /// Create a filesystem error for the given path.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OverlandError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Create an error for an external program that failed to start.
    pub fn task_spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        OverlandError::TaskSpawn {
            program: program.into(),
            source,
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        OverlandError::Validation(message.into())
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        OverlandError::Config(message.into())
    }

    /// True for errors caused by the target directory or file.
    pub fn is_filesystem(&self) -> bool {
        matches!(self, OverlandError::Filesystem { .. })
    }

    /// True for errors caused by missing or unreadable operator input.
    pub fn is_input(&self) -> bool {
        matches!(self, OverlandError::Input(_))
    }
}

/// Convenience type alias for Results using OverlandError.
pub type Result<T> = std::result::Result<T, OverlandError>;
