//! Spawning external programs and collecting their exit codes.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::error::{OverlandError, Result};

/// One external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTask {
    pub name: &'static str,
    pub program: String,
    pub args: Vec<String>,
    /// Redirect the program's stdout to this file instead of inheriting it.
    pub stdout: Option<PathBuf>,
}

impl ExternalTask {
    pub fn new(name: &'static str, program: impl Into<String>) -> Self {
        Self {
            name,
            program: program.into(),
            args: Vec::new(),
            stdout: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn stdout_to(mut self, path: impl AsRef<Path>) -> Self {
        self.stdout = Some(path.as_ref().to_path_buf());
        self
    }

    /// Shell-like rendering for logs and dry runs.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                line.push_str(&format!("'{}'", arg));
            } else {
                line.push_str(arg);
            }
        }
        if let Some(path) = &self.stdout {
            line.push_str(&format!(" > {}", path.display()));
        }
        line
    }
}

/// Exit status of a finished task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskOutcome {
    pub name: &'static str,
    pub code: i32,
}

impl TaskOutcome {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Sibling file that receives redirected stdout until the task succeeds.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.overland-{}", name, std::process::id()))
}

/// Run a single task to completion, blocking until it exits.
///
/// Redirected stdout is written to a staging file next to the target and
/// only replaces the target after a zero exit code, so a task that fails or
/// never starts leaves the previous output untouched.
pub fn run(task: &ExternalTask) -> Result<TaskOutcome> {
    info!(task = task.name, command = %task.command_line(), "running");

    let mut command = Command::new(&task.program);
    command.args(&task.args);

    let staged = match &task.stdout {
        Some(path) => {
            let staging = staging_path(path);
            let file =
                File::create(&staging).map_err(|e| OverlandError::filesystem(&staging, e))?;
            command.stdout(Stdio::from(file));
            Some((staging, path))
        }
        None => None,
    };

    let status = command.status();
    // Release the staging file handle before it is renamed or removed.
    drop(command);

    let status = match status {
        Ok(status) => status,
        Err(e) => {
            if let Some((staging, _)) = &staged {
                let _ = fs::remove_file(staging);
            }
            return Err(OverlandError::task_spawn(&task.program, e));
        }
    };

    // A process killed by a signal has no exit code.
    let code = status.code().unwrap_or(1);

    if let Some((staging, target)) = staged {
        if code == 0 {
            fs::rename(&staging, target).map_err(|e| OverlandError::filesystem(target, e))?;
        } else {
            let _ = fs::remove_file(&staging);
        }
    }

    if code == 0 {
        debug!(task = task.name, "finished");
    } else {
        warn!(task = task.name, code, "exited with failure");
    }

    Ok(TaskOutcome {
        name: task.name,
        code,
    })
}

/// Run tasks in order, stopping at the first one that fails.
///
/// Returns the outcome of the last task run. An empty list succeeds.
pub fn run_all(tasks: &[ExternalTask]) -> Result<TaskOutcome> {
    let mut last = TaskOutcome {
        name: "none",
        code: 0,
    };
    for task in tasks {
        last = run(task)?;
        if !last.success() {
            break;
        }
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_quotes_whitespace() {
        let task = ExternalTask::new("demo", "pytest")
            .arg("--nbmake")
            .arg("my notebooks")
            .stdout_to("out.txt");
        assert_eq!(task.command_line(), "pytest --nbmake 'my notebooks' > out.txt");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let task = ExternalTask::new("missing", "overland-definitely-not-a-program");
        let err = run(&task).unwrap_err();
        assert!(matches!(err, OverlandError::TaskSpawn { .. }));
    }

    #[test]
    fn test_missing_program_keeps_previous_output() {
        let out = std::env::temp_dir().join(format!("overland_keep_{}", std::process::id()));
        fs::write(&out, "pinned==1.0\n").unwrap();

        let task = ExternalTask::new("lock", "overland-definitely-not-a-program").stdout_to(&out);
        let err = run(&task).unwrap_err();

        assert!(matches!(err, OverlandError::TaskSpawn { .. }));
        assert_eq!(fs::read_to_string(&out).unwrap(), "pinned==1.0\n");
        assert!(!staging_path(&out).exists());

        fs::remove_file(&out).unwrap();
    }

    #[test]
    fn test_staging_path_is_sibling() {
        let staging = staging_path(Path::new("env/requirements.txt"));
        assert_eq!(staging.parent(), Some(Path::new("env")));
        assert_ne!(staging, PathBuf::from("env/requirements.txt"));
    }

    #[test]
    fn test_run_all_empty_succeeds() {
        assert!(run_all(&[]).unwrap().success());
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_propagates() {
        let outcome = run(&ExternalTask::new("fail", "sh").args(["-c", "exit 3"])).unwrap();
        assert_eq!(outcome.code, 3);
        assert!(!outcome.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_all_stops_at_first_failure() {
        let marker = std::env::temp_dir().join(format!("overland_run_all_{}", std::process::id()));
        let tasks = vec![
            ExternalTask::new("ok", "true"),
            ExternalTask::new("fail", "false"),
            ExternalTask::new("never", "touch").arg(marker.to_string_lossy().to_string()),
        ];

        let outcome = run_all(&tasks).unwrap();
        assert_eq!(outcome.name, "fail");
        assert_eq!(outcome.code, 1);
        assert!(!marker.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_stdout_redirect() {
        let out = std::env::temp_dir().join(format!("overland_stdout_{}", std::process::id()));
        let task = ExternalTask::new("echo", "echo").arg("pinned==1.0").stdout_to(&out);

        assert!(run(&task).unwrap().success());
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "pinned==1.0\n");

        std::fs::remove_file(&out).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_task_keeps_previous_output() {
        let out = std::env::temp_dir().join(format!("overland_failed_{}", std::process::id()));
        fs::write(&out, "pinned==1.0\n").unwrap();

        let task = ExternalTask::new("lock", "sh")
            .args(["-c", "echo partial; exit 2"])
            .stdout_to(&out);
        assert_eq!(run(&task).unwrap().code, 2);

        assert_eq!(fs::read_to_string(&out).unwrap(), "pinned==1.0\n");
        assert!(!staging_path(&out).exists());

        fs::remove_file(&out).unwrap();
    }
}
