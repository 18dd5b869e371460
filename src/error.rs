//! Error types for autocommit modules using thiserror.

use thiserror::Error;

/// Errors from spawning external processes.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to spawn {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git not found on PATH. Install git and make sure it is on your PATH")]
    GitNotInstalled,
}

/// Errors from the working-tree change detector.
///
/// Both variants render with the `git status failed: ` prefix so callers see
/// one consistent message shape regardless of whether the subprocess could
/// not be spawned or exited non-zero.
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("git status failed: {0}")]
    Query(String),

    #[error("git status failed: {0}")]
    Spawn(#[from] ProcessError),
}
