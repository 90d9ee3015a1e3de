//! Regenerate the pinned requirements file with pip-compile.

use std::path::PathBuf;

use super::runner::ExternalTask;
use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub upgrade: bool,
    pub install: bool,
}

impl LockOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            input: config.lock_input(),
            output: config.lock_output(),
            upgrade: config.lock_upgrade(),
            install: true,
        }
    }
}

/// Build the lock task; pip-compile's stdout becomes the output file.
pub fn lock_tasks(opts: &LockOptions) -> Vec<ExternalTask> {
    let mut tasks = Vec::new();
    if opts.install {
        tasks.push(ExternalTask::new("lock", "pip").args(["install", "pip-tools"]));
    }

    let mut compile = ExternalTask::new("lock", "pip-compile").arg("--resolver=backtracking");
    if opts.upgrade {
        compile = compile.arg("--upgrade");
    }
    tasks.push(
        compile
            .arg(opts.input.to_string_lossy().to_string())
            .stdout_to(&opts.output),
    );
    tasks
}
