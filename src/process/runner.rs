//! Subprocess execution for git commands.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::ProcessError;

/// Captured result of one finished subprocess.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Numeric exit code, or -1 when the process was killed by a signal.
    pub exit_code: i32,
    /// Captured stdout, lossily decoded as UTF-8.
    pub stdout: String,
    /// Captured stderr, lossily decoded as UTF-8.
    pub stderr: String,
}

impl ProcessOutput {
    /// Trimmed stderr, or `"unknown error"` when the stream was empty.
    ///
    /// Failure messages embed whatever the tool wrote to stderr; some git
    /// failures (e.g. killed hooks) produce nothing, hence the fallback.
    pub fn error_detail(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            "unknown error".to_string()
        } else {
            stderr.to_string()
        }
    }
}

/// Trait for running external commands in a working directory.
///
/// This abstraction allows scripting subprocess results in tests.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` inside `workdir` and wait for it to exit.
    ///
    /// Returns `Err` only when the process could not be spawned; a non-zero
    /// exit is reported through `ProcessOutput::success`.
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        workdir: &Path,
    ) -> Result<ProcessOutput, ProcessError>;
}

/// Default runner that spawns real subprocesses via tokio.
pub struct DefaultRunner;

#[async_trait]
impl CommandRunner for DefaultRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        workdir: &Path,
    ) -> Result<ProcessOutput, ProcessError> {
        let output = Command::new(program)
            .args(args)
            .current_dir(workdir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ProcessError::SpawnFailed {
                program: program.to_string(),
                source,
            })?;

        Ok(ProcessOutput {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Check that git is installed and accessible.
///
/// Uses the `which` crate for cross-platform executable detection.
/// Works on Windows (where.exe), Unix (which), and WASI.
pub async fn check_git_installed() -> Result<(), ProcessError> {
    if which::which("git").is_err() {
        return Err(ProcessError::GitNotInstalled);
    }

    let version_check = Command::new("git")
        .arg("--version")
        .output()
        .await
        .map_err(|source| ProcessError::SpawnFailed {
            program: "git".to_string(),
            source,
        })?;

    if !version_check.status.success() {
        return Err(ProcessError::GitNotInstalled);
    }

    Ok(())
}
