// ABOUTME: Read and discuss a single work item - GetIssueTool views it,
// ABOUTME: CommentTool posts a comment body to it.

use crate::error::ToolError;
use crate::exec::ExecutionOutcome;
use crate::tool::{ParamKind, ParameterSpec, Tool, ToolArguments, ToolDefinition, ToolResult};

use super::{JIRA_COMMENT, JIRA_GET_ISSUE, confirmed, failed, issue_key, with_payload, workitem};

/// Tool for viewing one work item as JSON.
pub struct GetIssueTool {
    definition: ToolDefinition,
}

impl GetIssueTool {
    pub fn new() -> Self {
        Self {
            definition: ToolDefinition::new(
                JIRA_GET_ISSUE,
                "Retrieve detailed information about a specific Jira work item. Shows all fields \
                 including description, reporter, watchers, attachments, linked issues, and full history.",
            )
            .parameter(issue_key()),
        }
    }
}

impl Default for GetIssueTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for GetIssueTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    fn build_args(&self, args: &ToolArguments) -> Result<Vec<String>, ToolError> {
        let mut argv = workitem(&["view"]);
        argv.extend([self.argument(args, "issue_key")?, "--json".to_string()]);
        Ok(argv)
    }

    fn format(
        &self,
        args: &ToolArguments,
        outcome: &ExecutionOutcome,
    ) -> Result<ToolResult, ToolError> {
        let key = self.argument(args, "issue_key")?;
        if !outcome.succeeded {
            return Ok(failed(
                format!("Error retrieving work item {}", key),
                &outcome.stderr,
            ));
        }
        Ok(with_payload(format!("Details for {}", key), &outcome.stdout))
    }
}

/// Tool for adding a comment.
pub struct CommentTool {
    definition: ToolDefinition,
}

impl CommentTool {
    pub fn new() -> Self {
        Self {
            definition: ToolDefinition::new(
                JIRA_COMMENT,
                "Add a comment to a Jira work item. Use to provide status updates, ask questions, \
                 or share information with the team working on the issue.",
            )
            .parameter(issue_key())
            .parameter(ParameterSpec::required(
                "comment",
                ParamKind::String,
                "The comment text. Supports markdown formatting.",
            )),
        }
    }
}

impl Default for CommentTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CommentTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    fn build_args(&self, args: &ToolArguments) -> Result<Vec<String>, ToolError> {
        let mut argv = workitem(&["comment", "create"]);
        argv.extend([
            "-k".to_string(),
            self.argument(args, "issue_key")?,
            "-b".to_string(),
            self.argument(args, "comment")?,
        ]);
        Ok(argv)
    }

    fn format(
        &self,
        args: &ToolArguments,
        outcome: &ExecutionOutcome,
    ) -> Result<ToolResult, ToolError> {
        let key = self.argument(args, "issue_key")?;
        if !outcome.succeeded {
            return Ok(failed(
                format!("Error adding comment to {}", key),
                &outcome.stderr,
            ));
        }
        Ok(confirmed(format!("Comment added to {}", key), &outcome.stdout))
    }
}
