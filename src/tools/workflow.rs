// ABOUTME: Workflow tools - UpdateStatusTool transitions a work item and
// ABOUTME: AssignTool changes its owner.

use crate::error::ToolError;
use crate::exec::ExecutionOutcome;
use crate::tool::{ParamKind, ParameterSpec, Tool, ToolArguments, ToolDefinition, ToolResult};

use super::{JIRA_ASSIGN, JIRA_UPDATE_STATUS, confirmed, failed, issue_key, workitem};

/// Tool for status transitions.
pub struct UpdateStatusTool {
    definition: ToolDefinition,
}

impl UpdateStatusTool {
    pub fn new() -> Self {
        Self {
            definition: ToolDefinition::new(
                JIRA_UPDATE_STATUS,
                "Transition a Jira work item to a new status (e.g., 'In Progress', 'Done', 'Blocked'). \
                 Use to move work items through your workflow.",
            )
            .parameter(issue_key())
            .parameter(ParameterSpec::required(
                "status",
                ParamKind::String,
                "The target status to transition to. Example values: 'In Progress', 'Done', 'Blocked', 'Review'",
            )),
        }
    }
}

impl Default for UpdateStatusTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for UpdateStatusTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    fn build_args(&self, args: &ToolArguments) -> Result<Vec<String>, ToolError> {
        let mut argv = workitem(&["transition"]);
        argv.extend([
            "-k".to_string(),
            self.argument(args, "issue_key")?,
            "-s".to_string(),
            self.argument(args, "status")?,
        ]);
        Ok(argv)
    }

    fn format(
        &self,
        args: &ToolArguments,
        outcome: &ExecutionOutcome,
    ) -> Result<ToolResult, ToolError> {
        let key = self.argument(args, "issue_key")?;
        let status = self.argument(args, "status")?;
        if !outcome.succeeded {
            return Ok(failed(
                format!("Error transitioning {} to \"{}\"", key, status),
                &outcome.stderr,
            ));
        }
        Ok(confirmed(
            format!("Work item {} transitioned to \"{}\"", key, status),
            &outcome.stdout,
        ))
    }
}

/// Tool for assigning a work item.
pub struct AssignTool {
    definition: ToolDefinition,
}

impl AssignTool {
    pub fn new() -> Self {
        Self {
            definition: ToolDefinition::new(
                JIRA_ASSIGN,
                "Assign a Jira work item to a user. Use to delegate tasks and clarify ownership of work items.",
            )
            .parameter(issue_key())
            .parameter(ParameterSpec::required(
                "assignee",
                ParamKind::String,
                "The email address or username of the person to assign the work item to (e.g., 'user@example.com')",
            )),
        }
    }
}

impl Default for AssignTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for AssignTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    fn build_args(&self, args: &ToolArguments) -> Result<Vec<String>, ToolError> {
        let mut argv = workitem(&["assign"]);
        argv.extend([
            "-k".to_string(),
            self.argument(args, "issue_key")?,
            "-a".to_string(),
            self.argument(args, "assignee")?,
        ]);
        Ok(argv)
    }

    fn format(
        &self,
        args: &ToolArguments,
        outcome: &ExecutionOutcome,
    ) -> Result<ToolResult, ToolError> {
        let key = self.argument(args, "issue_key")?;
        let assignee = self.argument(args, "assignee")?;
        if !outcome.succeeded {
            return Ok(failed(
                format!("Error assigning {} to {}", key, assignee),
                &outcome.stderr,
            ));
        }
        Ok(confirmed(
            format!("Work item {} assigned to {}", key, assignee),
            &outcome.stdout,
        ))
    }
}
