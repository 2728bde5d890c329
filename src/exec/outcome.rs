// ABOUTME: Defines ExecutionOutcome - the captured result of one external
// ABOUTME: process invocation, including the synthetic launch-failure case.

/// Raw result of running the external program once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub stdout: String,
    pub stderr: String,
    pub succeeded: bool,
    /// Exit code, if the process ran and exited normally.
    pub exit_code: Option<i32>,
    /// The process never started.
    pub launch_failed: bool,
}

impl ExecutionOutcome {
    /// The process exited with status zero.
    pub fn success(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            succeeded: true,
            exit_code: Some(0),
            launch_failed: false,
        }
    }

    /// The process ran and failed. `exit_code` is `None` when killed by a signal.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            succeeded: false,
            exit_code,
            launch_failed: false,
        }
    }

    /// The process could not be started.
    pub fn launch_failure(program: &str, error: &std::io::Error) -> Self {
        Self {
            stdout: String::new(),
            stderr: format!("failed to launch `{}`: {}", program, error),
            succeeded: false,
            exit_code: None,
            launch_failed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_failure_differs_from_empty_exit() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory");
        let launch = ExecutionOutcome::launch_failure("acli", &err);
        let exit = ExecutionOutcome::failure(Some(1), "", "");

        assert!(!launch.succeeded);
        assert!(launch.launch_failed);
        assert!(launch.stdout.is_empty());
        assert_eq!(launch.stderr, "failed to launch `acli`: No such file or directory");
        assert_ne!(launch.stderr, exit.stderr);
        assert!(!exit.launch_failed);
    }
}
