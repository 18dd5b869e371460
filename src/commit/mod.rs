//! Auto-commit of task changes.

pub mod auto;
pub mod detect;

pub use auto::{auto_commit, commit_message, perform_auto_commit, CommitOutcome, SKIP_NO_CHANGES};
pub use detect::has_uncommitted_changes;
