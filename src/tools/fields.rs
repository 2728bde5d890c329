// ABOUTME: Field editing tools - SetFieldTool writes one field, and the label
// ABOUTME: tools add or remove a label. All run `acli jira workitem edit`.

use crate::error::ToolError;
use crate::exec::ExecutionOutcome;
use crate::tool::{ParamKind, ParameterSpec, Tool, ToolArguments, ToolDefinition, ToolResult};

use super::{JIRA_ADD_LABEL, JIRA_REMOVE_LABEL, JIRA_SET_FIELD, confirmed, failed, issue_key, workitem};

/// `edit -k <key> <flag> <value>`.
fn edit(key: String, flag: String, value: String) -> Vec<String> {
    let mut argv = workitem(&["edit"]);
    argv.extend(["-k".to_string(), key, flag, value]);
    argv
}

/// Tool for setting an arbitrary field.
///
/// The field name becomes a `--<field>` flag, lowercased, so it must name a
/// flag the CLI's `edit` command understands.
pub struct SetFieldTool {
    definition: ToolDefinition,
}

impl SetFieldTool {
    pub fn new() -> Self {
        Self {
            definition: ToolDefinition::new(
                JIRA_SET_FIELD,
                "Update a custom field value on a Jira work item. Use to set fields like components, \
                 fix versions, labels, environment, etc.",
            )
            .parameter(issue_key())
            .parameter(ParameterSpec::required(
                "field",
                ParamKind::String,
                "The field name to update (e.g., 'summary', 'description', 'environment')",
            ))
            .parameter(ParameterSpec::required(
                "value",
                ParamKind::String,
                "The value to set for the field",
            )),
        }
    }
}

impl Default for SetFieldTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for SetFieldTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    fn build_args(&self, args: &ToolArguments) -> Result<Vec<String>, ToolError> {
        let field = self.argument(args, "field")?;
        Ok(edit(
            self.argument(args, "issue_key")?,
            format!("--{}", field.to_lowercase()),
            self.argument(args, "value")?,
        ))
    }

    fn format(
        &self,
        args: &ToolArguments,
        outcome: &ExecutionOutcome,
    ) -> Result<ToolResult, ToolError> {
        let key = self.argument(args, "issue_key")?;
        let field = self.argument(args, "field")?;
        if !outcome.succeeded {
            return Ok(failed(
                format!("Error updating field \"{}\" on {}", field, key),
                &outcome.stderr,
            ));
        }
        let value = self.argument(args, "value")?;
        Ok(confirmed(
            format!("Work item {}: field \"{}\" set to \"{}\"", key, field, value),
            &outcome.stdout,
        ))
    }
}

/// Tool for adding a label.
pub struct AddLabelTool {
    definition: ToolDefinition,
}

impl AddLabelTool {
    pub fn new() -> Self {
        Self {
            definition: ToolDefinition::new(
                JIRA_ADD_LABEL,
                "Add a label/tag to a Jira work item. Use to categorize and organize work items for \
                 easier filtering and tracking.",
            )
            .parameter(issue_key())
            .parameter(ParameterSpec::required(
                "label",
                ParamKind::String,
                "The label to add (single word, no spaces). Examples: 'bug', 'urgent', 'documentation'",
            )),
        }
    }
}

impl Default for AddLabelTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for AddLabelTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    fn build_args(&self, args: &ToolArguments) -> Result<Vec<String>, ToolError> {
        Ok(edit(
            self.argument(args, "issue_key")?,
            "-l".to_string(),
            self.argument(args, "label")?,
        ))
    }

    fn format(
        &self,
        args: &ToolArguments,
        outcome: &ExecutionOutcome,
    ) -> Result<ToolResult, ToolError> {
        let key = self.argument(args, "issue_key")?;
        let label = self.argument(args, "label")?;
        if !outcome.succeeded {
            return Ok(failed(
                format!("Error adding label \"{}\" to {}", label, key),
                &outcome.stderr,
            ));
        }
        Ok(confirmed(
            format!("Label \"{}\" added to {}", label, key),
            &outcome.stdout,
        ))
    }
}

/// Tool for removing a label.
pub struct RemoveLabelTool {
    definition: ToolDefinition,
}

impl RemoveLabelTool {
    pub fn new() -> Self {
        Self {
            definition: ToolDefinition::new(
                JIRA_REMOVE_LABEL,
                "Remove a label/tag from a Jira work item. Use to clean up or reorganize issue categorization.",
            )
            .parameter(issue_key())
            .parameter(ParameterSpec::required(
                "label",
                ParamKind::String,
                "The label to remove",
            )),
        }
    }
}

impl Default for RemoveLabelTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for RemoveLabelTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    fn build_args(&self, args: &ToolArguments) -> Result<Vec<String>, ToolError> {
        Ok(edit(
            self.argument(args, "issue_key")?,
            "--remove-labels".to_string(),
            self.argument(args, "label")?,
        ))
    }

    fn format(
        &self,
        args: &ToolArguments,
        outcome: &ExecutionOutcome,
    ) -> Result<ToolResult, ToolError> {
        let key = self.argument(args, "issue_key")?;
        let label = self.argument(args, "label")?;
        if !outcome.succeeded {
            return Ok(failed(
                format!("Error removing label \"{}\" from {}", label, key),
                &outcome.stderr,
            ));
        }
        Ok(confirmed(
            format!("Label \"{}\" removed from {}", label, key),
            &outcome.stdout,
        ))
    }
}
