// ABOUTME: Exec module - runs the external CLI and captures its outcome.
// ABOUTME: Arguments are passed as a discrete vector, never through a shell.

mod outcome;
mod runner;

pub use outcome::ExecutionOutcome;
pub use runner::{CommandRunner, ProcessRunner};
