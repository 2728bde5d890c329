// ABOUTME: CommandRunner trait and ProcessRunner - spawns the CLI directly
// ABOUTME: with piped output and waits for it to exit.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use super::ExecutionOutcome;

/// Runs one external program to completion.
///
/// Implementations must never fail: every problem is reported through the
/// returned outcome.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> ExecutionOutcome;
}

/// Runs real processes via `tokio::process`.
///
/// No shell is involved and no timeout is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> ExecutionOutcome {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match cmd.output().await {
            Ok(output) => output,
            Err(e) => {
                warn!(program, error = %e, "failed to launch external program");
                return ExecutionOutcome::launch_failure(program, &e);
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let code = output.status.code();
        debug!(program, ?code, "external program exited");

        if output.status.success() {
            ExecutionOutcome::success(stdout, stderr)
        } else {
            ExecutionOutcome::failure(code, stdout, stderr)
        }
    }
}
