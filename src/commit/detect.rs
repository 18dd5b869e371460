//! Working-tree change detection.

use std::path::Path;

use crate::error::StatusError;
use crate::process::CommandRunner;

/// Check if there are uncommitted changes in the working directory.
///
/// Runs `git status --porcelain` and treats any non-empty output as "changes
/// exist". Fails if git status cannot be determined (not a git repo, git not
/// installed, etc.).
pub async fn has_uncommitted_changes<R: CommandRunner>(
    runner: &R,
    workdir: &Path,
) -> Result<bool, StatusError> {
    let result = runner.run("git", &["status", "--porcelain"], workdir).await?;
    if !result.success {
        let stderr = result.stderr.trim();
        let detail = if stderr.is_empty() {
            format!("unknown error (exit code {})", result.exit_code)
        } else {
            stderr.to_string()
        };
        return Err(StatusError::Query(detail));
    }
    Ok(!result.stdout.trim().is_empty())
}
