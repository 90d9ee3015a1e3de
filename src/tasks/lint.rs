//! Lint the repository with pre-commit.

use super::runner::ExternalTask;

/// Build the lint task, optionally preceded by installing pre-commit.
pub fn lint_tasks(install: bool) -> Vec<ExternalTask> {
    let mut tasks = Vec::new();
    if install {
        tasks.push(ExternalTask::new("lint", "pip").args(["install", "pre-commit"]));
    }
    tasks.push(ExternalTask::new("lint", "pre-commit").args(["run", "--all-files"]));
    tasks
}
