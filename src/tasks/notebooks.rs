//! Execute the tutorial notebooks as tests through pytest and nbmake.

use std::path::PathBuf;

use super::runner::ExternalTask;
use crate::config::Config;
use crate::error::{OverlandError, Result};

/// Options for the notebook test task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookOptions {
    /// Paths handed to pytest; the current directory when empty.
    pub paths: Vec<PathBuf>,
    pub kernel: String,
    /// Seconds nbmake waits for a single notebook.
    pub timeout: u64,
    /// pytest-xdist worker count, "auto" or a positive number.
    pub workers: String,
    pub verbosity: u8,
    pub nbmake: String,
    pub requirements: PathBuf,
    /// Install pytest, nbmake and the requirements first.
    pub install: bool,
    /// Passed through to pytest unchanged.
    pub extra_args: Vec<String>,
}

impl NotebookOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            paths: Vec::new(),
            kernel: config.kernel(),
            timeout: config.timeout(),
            workers: config.workers(),
            verbosity: config.verbosity(),
            nbmake: config.nbmake(),
            requirements: config.requirements(),
            install: true,
            extra_args: Vec::new(),
        }
    }
}

fn validate_workers(workers: &str) -> Result<()> {
    if workers == "auto" || workers.parse::<u32>().is_ok_and(|n| n > 0) {
        Ok(())
    } else {
        Err(OverlandError::validation(format!(
            "Invalid worker count '{}': use \"auto\" or a positive number",
            workers
        )))
    }
}

/// Build the install steps and the pytest run for the notebooks.
pub fn notebook_tasks(opts: &NotebookOptions) -> Result<Vec<ExternalTask>> {
    validate_workers(&opts.workers)?;
    if opts.timeout == 0 {
        return Err(OverlandError::validation("Notebook timeout must be at least 1 second"));
    }

    let mut tasks = Vec::new();

    if opts.install {
        tasks.push(ExternalTask::new("test", "pip").args(["install", opts.nbmake.as_str()]));
        tasks.push(
            ExternalTask::new("test", "pip")
                .args(["install", "pytest", "pytest-xdist", "-r"])
                .arg(opts.requirements.to_string_lossy().to_string()),
        );
    }

    let mut pytest = ExternalTask::new("test", "pytest");
    if opts.paths.is_empty() {
        pytest = pytest.arg(".");
    } else {
        pytest = pytest.args(opts.paths.iter().map(|p| p.to_string_lossy().to_string()));
    }

    pytest = pytest
        .arg("--nbmake")
        .arg(format!("--nbmake-kernel={}", opts.kernel))
        .arg(format!("--nbmake-timeout={}", opts.timeout))
        .args(["-n", opts.workers.as_str()]);

    if opts.verbosity > 0 {
        pytest = pytest.arg(format!("-{}", "v".repeat(opts.verbosity as usize)));
    }

    tasks.push(pytest.args(opts.extra_args.iter().cloned()));
    Ok(tasks)
}
