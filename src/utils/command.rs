use crate::core::traits::{CapturedOutput, CommandExecutor, ProcessExit};
use crate::utils::error::{AppError, AppResult};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// Executor that spawns real processes, inheriting stdio
pub struct SystemExecutor;

impl SystemExecutor {
    fn shell_command(command: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }

    fn wait(mut cmd: Command) -> AppResult<ProcessExit> {
        let status = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(exit_of(status))
    }
}

fn exit_of(status: ExitStatus) -> ProcessExit {
    ProcessExit { code: status.code() }
}

impl CommandExecutor for SystemExecutor {
    fn run_shell(&self, command: &str, dir: &Path) -> AppResult<ProcessExit> {
        debug!(command, dir = %dir.display(), "running shell command");
        let mut cmd = Self::shell_command(command);
        cmd.current_dir(dir);
        Self::wait(cmd)
    }

    fn run(&self, program: &str, args: &[String], dir: &Path) -> AppResult<ProcessExit> {
        debug!(program, ?args, dir = %dir.display(), "running program");
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(dir);
        Self::wait(cmd)
    }

    fn capture(&self, program: &str, args: &[String]) -> AppResult<CapturedOutput> {
        debug!(program, ?args, "capturing program output");
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(CapturedOutput {
            exit: exit_of(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn require(&self, program: &str) -> AppResult<()> {
        let path = which::which(program).map_err(|_| AppError::MissingTool(program.to_string()))?;
        debug!(program, path = %path.display(), "found tool");
        Ok(())
    }
}

/// Split a free-form option string into separate arguments
pub fn split_options(options: &str) -> Vec<String> {
    options.split_whitespace().map(str::to_string).collect()
}
