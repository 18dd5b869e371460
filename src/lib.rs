//! autocommit - stages and commits task changes with a deterministic message.
//!
//! # Overview
//!
//! Given a working directory, a task id and a task title, autocommit checks
//! the working tree for uncommitted changes, stages everything, commits with
//! the message `feat: {task_id} - {task_title}` and resolves the short SHA of
//! the new commit. The whole attempt is reported as one [`CommitOutcome`];
//! no step ever panics or returns an error past the orchestrator.
//!
//! External git calls go through the [`process::CommandRunner`] trait and
//! diagnostics through the [`logging::CommitLog`] trait, so both can be
//! substituted in tests.

pub mod commit;
pub mod error;
pub mod logging;
pub mod process;

// Re-export commonly used types
pub use commit::{
    auto_commit, commit_message, has_uncommitted_changes, perform_auto_commit, CommitOutcome,
    SKIP_NO_CHANGES,
};
pub use error::{ProcessError, StatusError};
pub use logging::{CommitLog, NullLog, TracingLog};
pub use process::{check_git_installed, CommandRunner, DefaultRunner, ProcessOutput};
