//! Seams between the batch logic and the outside world
//!
//! The runner and the cloner only ever talk to external programs and to the
//! user through these traits, so both can be driven by fakes in tests.

use crate::utils::error::AppResult;
use std::path::Path;

/// How an external process finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn describe(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "termination by signal".to_string(),
        }
    }
}

/// Output collected from a process whose stdout we need to consume
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub exit: ProcessExit,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external programs
///
/// `run_shell` is the only place a free-form command string reaches a shell.
/// Everything else passes an explicit argument vector.
pub trait CommandExecutor {
    /// Run a user command string through the platform shell inside `dir`,
    /// streaming its output to ours
    fn run_shell(&self, command: &str, dir: &Path) -> AppResult<ProcessExit>;

    /// Run `program` with `args` inside `dir`, streaming its output to ours
    fn run(&self, program: &str, args: &[String], dir: &Path) -> AppResult<ProcessExit>;

    /// Run `program` with `args` and collect its output
    fn capture(&self, program: &str, args: &[String]) -> AppResult<CapturedOutput>;

    /// Fail with `MissingTool` unless `program` can be found
    fn require(&self, program: &str) -> AppResult<()>;
}

/// Per-item yes/no decision
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> AppResult<bool>;
}
