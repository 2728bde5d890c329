// ABOUTME: Implements the Dispatcher - resolve, validate, build argv, run,
// ABOUTME: and format. Every failure is scoped to the call and never escapes.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::ToolError;
use crate::exec::{CommandRunner, ProcessRunner};
use crate::tool::{Registry, ToolArguments, ToolDefinition, ToolResult};
use crate::tools::jira_registry;

/// Executes tool calls against the external CLI.
///
/// Holds no per-call state, so one instance serves concurrent calls.
#[derive(Clone)]
pub struct Dispatcher {
    config: Arc<Config>,
    registry: Arc<Registry>,
    runner: Arc<dyn CommandRunner>,
}

impl Dispatcher {
    /// Create a dispatcher from explicit parts.
    pub fn new(config: Config, registry: Registry, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            runner,
        }
    }

    /// The Jira tool set, running real processes.
    pub fn jira(config: Config) -> Self {
        Self::new(config, jira_registry(), Arc::new(ProcessRunner))
    }

    /// The configuration this dispatcher was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The tool catalog.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Definitions of all tools, in advertised order.
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }

    /// Execute one tool call. Always returns a result.
    pub async fn execute(&self, name: &str, arguments: Option<serde_json::Value>) -> ToolResult {
        info!(tool = name, "tool call");

        let outcome = AssertUnwindSafe(self.try_execute(name, arguments))
            .catch_unwind()
            .await;

        let result = match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(e @ ToolError::UnknownTool(_))) => ToolResult::error(e.to_string()),
            Ok(Err(e)) => ToolResult::error(format!("Error executing tool: {}", e)),
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                warn!(tool = name, %message, "tool call panicked");
                ToolResult::error(format!("Error executing tool: {}", message))
            }
        };

        if result.is_error {
            warn!(tool = name, "tool call failed");
        } else {
            info!(tool = name, "tool call succeeded");
        }
        result
    }

    async fn try_execute(
        &self,
        name: &str,
        arguments: Option<serde_json::Value>,
    ) -> Result<ToolResult, ToolError> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let args = ToolArguments::from_json(arguments)?;
        args.validate(tool.name(), &tool.definition().parameters)?;

        let argv = tool.build_args(&args)?;
        debug!(tool = name, program = %self.config.program, ?argv, "running");

        let outcome = self.runner.run(&self.config.program, &argv).await;
        if !outcome.succeeded {
            warn!(
                tool = name,
                exit_code = ?outcome.exit_code,
                launch_failed = outcome.launch_failed,
                stderr = %outcome.stderr.trim_end(),
                "external program failed"
            );
        }

        tool.format(&args, &outcome)
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "internal error".to_string()
    }
}
