//! Named tasks that delegate to external Python tooling.
//!
//! None of these tasks reimplement the tools they call: each one builds a
//! list of [`ExternalTask`]s and hands them to [`run_all`], which stops at the
//! first non-zero exit code and reports it back.

mod lint;
mod lock;
mod notebooks;
mod runner;

pub use lint::lint_tasks;
pub use lock::{LockOptions, lock_tasks};
pub use notebooks::{NotebookOptions, notebook_tasks};
pub use runner::{ExternalTask, TaskOutcome, run, run_all};
