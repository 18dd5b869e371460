//! External command execution.

pub mod runner;

pub use runner::{check_git_installed, CommandRunner, DefaultRunner, ProcessOutput};
