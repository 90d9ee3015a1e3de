//! Handlers for the delegated test, lint, lock and all tasks.

use tracing::info;

use crate::cli::{LockArgs, TestArgs};
use crate::config::Config;
use crate::error::Result;
use crate::tasks::{
    ExternalTask, LockOptions, NotebookOptions, lint_tasks, lock_tasks, notebook_tasks, run_all,
};

/// Merge `overland test` flags over the configured notebook settings.
pub fn test_options(config: &Config, args: TestArgs) -> NotebookOptions {
    let mut opts = NotebookOptions::from_config(config);
    opts.paths = args.paths;
    if let Some(timeout) = args.timeout {
        opts.timeout = timeout;
    }
    if let Some(workers) = args.workers {
        opts.workers = workers;
    }
    if let Some(kernel) = args.kernel {
        opts.kernel = kernel;
    }
    opts.install = !args.no_install;
    opts.extra_args = args.extra;
    opts
}

/// Merge `overland lock` flags over the configured lock settings.
pub fn lock_options(config: &Config, args: LockArgs) -> LockOptions {
    let mut opts = LockOptions::from_config(config);
    if let Some(input) = args.input {
        opts.input = input;
    }
    if let Some(output) = args.output {
        opts.output = output;
    }
    if args.no_upgrade {
        opts.upgrade = false;
    }
    opts.install = !args.no_install;
    opts
}

fn run_tasks(tasks: &[ExternalTask]) -> Result<i32> {
    let outcome = run_all(tasks)?;
    Ok(outcome.code)
}

pub fn handle_test(config: &Config, args: TestArgs) -> Result<i32> {
    run_tasks(&notebook_tasks(&test_options(config, args))?)
}

pub fn handle_lint(no_install: bool) -> Result<i32> {
    run_tasks(&lint_tasks(!no_install))
}

pub fn handle_lock(config: &Config, args: LockArgs) -> Result<i32> {
    run_tasks(&lock_tasks(&lock_options(config, args)))
}

/// Run lint, lock and test, the default task order.
pub fn handle_all(config: &Config, no_install: bool) -> Result<i32> {
    let test_args = TestArgs {
        no_install,
        ..Default::default()
    };
    let lock_args = LockArgs {
        no_install,
        ..Default::default()
    };

    // Build every command line first so a bad setting fails before anything runs.
    let mut tasks = lint_tasks(!no_install);
    tasks.extend(lock_tasks(&lock_options(config, lock_args)));
    tasks.extend(notebook_tasks(&test_options(config, test_args))?);

    info!(count = tasks.len(), "running lint, lock and test");
    run_tasks(&tasks)
}
