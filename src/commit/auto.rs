//! Auto-commit orchestration: stage and commit task changes when the working
//! tree is dirty, reporting a single structured outcome.

use std::path::Path;

use serde::Serialize;
use serde_json::json;

use crate::commit::detect::has_uncommitted_changes;
use crate::logging::{CommitLog, TracingLog};
use crate::process::{CommandRunner, DefaultRunner};

/// Skip reason reported when the working tree has nothing to commit.
pub const SKIP_NO_CHANGES: &str = "no uncommitted changes";

/// Log category tag for all auto-commit diagnostics.
const LOG_TAG: &str = "AUTO-COMMIT";

/// Result of one auto-commit attempt.
///
/// The three variants are mutually exclusive by construction: an attempt
/// either created a commit, skipped because the tree was clean, or failed at
/// an external step. A commit whose short id could not be resolved is still
/// `Committed`; identifier resolution is deliberately non-fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommitOutcome {
    Committed {
        /// The commit message used.
        message: String,
        /// Short SHA of the new commit, when `rev-parse` succeeded.
        #[serde(skip_serializing_if = "Option::is_none")]
        short_id: Option<String>,
    },
    Skipped {
        reason: String,
    },
    Failed {
        error: String,
    },
}

impl CommitOutcome {
    /// True iff a new commit was created.
    pub fn is_committed(&self) -> bool {
        matches!(self, CommitOutcome::Committed { .. })
    }

    /// Short id of the new commit, if one was created and resolved.
    pub fn short_id(&self) -> Option<&str> {
        match self {
            CommitOutcome::Committed { short_id, .. } => short_id.as_deref(),
            _ => None,
        }
    }

    /// Error message, if the attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            CommitOutcome::Failed { error } => Some(error),
            _ => None,
        }
    }
}

/// Build the deterministic commit message for a task.
pub fn commit_message(task_id: &str, task_title: &str) -> String {
    format!("feat: {task_id} - {task_title}")
}

/// Stage all changes and commit them with a standardized message.
///
/// Convenience wrapper that binds the real subprocess runner and the
/// tracing-backed log.
pub async fn auto_commit(workdir: &Path, task_id: &str, task_title: &str) -> CommitOutcome {
    perform_auto_commit(&DefaultRunner, &TracingLog, workdir, task_id, task_title).await
}

/// Stage all changes and create a commit with a standardized message format.
///
/// Runs `git status --porcelain`, `git add -A`, `git commit -m <msg>` and
/// `git rev-parse --short HEAD` strictly in sequence, each gated on the
/// previous step. Never returns an error: every failure is folded into
/// [`CommitOutcome::Failed`]. A failed `rev-parse` does not invalidate the
/// commit; the outcome is still `Committed` with `short_id` unset.
///
/// No compensation is performed on failure. If the commit succeeds but
/// resolution fails, the commit remains; callers needing rollback must do so
/// themselves.
pub async fn perform_auto_commit<R: CommandRunner, L: CommitLog>(
    runner: &R,
    log: &L,
    workdir: &Path,
    task_id: &str,
    task_title: &str,
) -> CommitOutcome {
    log.event(
        LOG_TAG,
        &format!("perform_auto_commit called for {task_id}"),
        json!({
            "workdir": workdir.display().to_string(),
            "task_id": task_id,
            "task_title": task_title,
        }),
    );
    log.status_snapshot(LOG_TAG, workdir, &format!("before commit for {task_id}"));

    // Check for uncommitted changes first
    let has_changes = match has_uncommitted_changes(runner, workdir).await {
        Ok(has_changes) => {
            log.event(
                LOG_TAG,
                &format!("has_uncommitted_changes result for {task_id}"),
                json!({
                    "workdir": workdir.display().to_string(),
                    "has_changes": has_changes,
                }),
            );
            has_changes
        }
        Err(e) => {
            log.event(
                LOG_TAG,
                &format!("has_uncommitted_changes error for {task_id}"),
                json!({
                    "workdir": workdir.display().to_string(),
                    "error": e.to_string(),
                }),
            );
            return CommitOutcome::Failed {
                error: e.to_string(),
            };
        }
    };
    if !has_changes {
        log.event(
            LOG_TAG,
            &format!("SKIPPING commit for {task_id} - no changes"),
            json!({ "workdir": workdir.display().to_string() }),
        );
        return CommitOutcome::Skipped {
            reason: SKIP_NO_CHANGES.to_string(),
        };
    }

    // Stage all changes
    log.event(
        LOG_TAG,
        &format!("Running git add -A for {task_id}"),
        json!({ "workdir": workdir.display().to_string() }),
    );
    let add_detail = match runner.run("git", &["add", "-A"], workdir).await {
        Ok(out) if out.success => None,
        Ok(out) => {
            log.event(
                LOG_TAG,
                &format!("git add FAILED for {task_id}"),
                json!({
                    "workdir": workdir.display().to_string(),
                    "stderr": out.stderr,
                    "exit_code": out.exit_code,
                }),
            );
            Some(out.error_detail())
        }
        Err(e) => Some(e.to_string()),
    };
    if let Some(detail) = add_detail {
        return CommitOutcome::Failed {
            error: format!("git add failed: {detail}"),
        };
    }

    // Create commit with standardized message
    let message = commit_message(task_id, task_title);
    log.event(
        LOG_TAG,
        &format!("Running git commit for {task_id}"),
        json!({
            "workdir": workdir.display().to_string(),
            "message": message,
        }),
    );
    let commit_detail = match runner.run("git", &["commit", "-m", &message], workdir).await {
        Ok(out) if out.success => None,
        Ok(out) => {
            log.event(
                LOG_TAG,
                &format!("git commit FAILED for {task_id}"),
                json!({
                    "workdir": workdir.display().to_string(),
                    "stderr": out.stderr,
                    "stdout": out.stdout,
                    "exit_code": out.exit_code,
                }),
            );
            Some(out.error_detail())
        }
        Err(e) => Some(e.to_string()),
    };
    if let Some(detail) = commit_detail {
        return CommitOutcome::Failed {
            error: format!("git commit failed: {detail}"),
        };
    }

    // Get the short SHA of the new commit. Non-fatal: the commit stands even
    // if resolution fails.
    let short_id = match runner
        .run("git", &["rev-parse", "--short", "HEAD"], workdir)
        .await
    {
        Ok(out) if out.success => Some(out.stdout.trim().to_string()),
        _ => None,
    };

    log.event(
        LOG_TAG,
        &format!("Commit SUCCESS for {task_id}"),
        json!({
            "workdir": workdir.display().to_string(),
            "short_id": short_id,
            "message": message,
        }),
    );
    log.status_snapshot(LOG_TAG, workdir, &format!("after commit for {task_id}"));

    CommitOutcome::Committed { message, short_id }
}
