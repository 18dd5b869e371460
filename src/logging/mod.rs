//! Diagnostic logging for commit orchestration.
//!
//! The orchestrator only talks to the [`CommitLog`] trait, so tests can swap
//! in a recording stub. The default [`TracingLog`] forwards everything to
//! `tracing` at debug level; output is controlled via `RUST_LOG`.

use std::path::Path;

use serde_json::Value;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Sink for diagnostic events emitted during an auto-commit attempt.
///
/// Both operations are fire-and-forget: they never fail and never influence
/// control flow in the orchestrator.
pub trait CommitLog: Send + Sync {
    /// Record a structured event with a category tag and key/value payload.
    fn event(&self, tag: &str, message: &str, fields: Value);

    /// Record a snapshot of the working-tree status for audit trails.
    fn status_snapshot(&self, tag: &str, workdir: &Path, label: &str);
}

/// Default log backed by the `tracing` crate.
///
/// Status snapshots shell out to `git status --porcelain` synchronously and
/// log the captured output; a failure to capture is itself logged and
/// otherwise ignored.
pub struct TracingLog;

impl CommitLog for TracingLog {
    fn event(&self, tag: &str, message: &str, fields: Value) {
        debug!(tag, fields = %fields, "{message}");
    }

    fn status_snapshot(&self, tag: &str, workdir: &Path, label: &str) {
        let output = std::process::Command::new("git")
            .args(["status", "--porcelain"])
            .current_dir(workdir)
            .output();
        match output {
            Ok(out) if out.status.success() => {
                let status = String::from_utf8_lossy(&out.stdout);
                debug!(tag, label, status = %status.trim_end(), "git status snapshot");
            }
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                debug!(tag, label, stderr = %stderr.trim(), "git status snapshot failed");
            }
            Err(e) => {
                debug!(tag, label, error = %e, "could not capture git status snapshot");
            }
        }
    }
}

/// Log that discards everything. Useful for embedding callers that bring
/// their own observability.
pub struct NullLog;

impl CommitLog for NullLog {
    fn event(&self, _tag: &str, _message: &str, _fields: Value) {}

    fn status_snapshot(&self, _tag: &str, _workdir: &Path, _label: &str) {}
}

/// Initialize the tracing subscriber for the CLI binary.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr in compact
/// format so stdout stays reserved for the outcome itself.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
