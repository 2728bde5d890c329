// ABOUTME: LinkIssueTool - relates two work items with a named link type.
// ABOUTME: Runs `acli jira workitem link create`, defaulting the type to Relates.

use crate::error::ToolError;
use crate::exec::ExecutionOutcome;
use crate::tool::{ParamKind, ParameterSpec, Tool, ToolArguments, ToolDefinition, ToolResult};

use super::{JIRA_LINK_ISSUE, confirmed, failed, workitem};

/// Link type used when none is given.
pub const DEFAULT_LINK_TYPE: &str = "Relates";

/// Tool for linking work items.
pub struct LinkIssueTool {
    definition: ToolDefinition,
}

impl LinkIssueTool {
    pub fn new() -> Self {
        Self {
            definition: ToolDefinition::new(
                JIRA_LINK_ISSUE,
                "Create a link between two Jira work items to show relationships. Use to track \
                 dependencies, blocking relationships, or related work.",
            )
            .parameter(ParameterSpec::required(
                "from_issue",
                ParamKind::String,
                "The source Jira work item key (e.g., 'SSAS-123')",
            ))
            .parameter(ParameterSpec::required(
                "to_issue",
                ParamKind::String,
                "The target Jira work item key (e.g., 'SSAS-456')",
            ))
            .parameter(
                ParameterSpec::optional(
                    "link_type",
                    ParamKind::String,
                    "The relationship type. Common options: 'Relates' (default), 'Blocks', 'Blocked by', \
                     'Duplicate', 'Cloners', 'Part of'. Use the exact name from your Jira instance.",
                )
                .with_default(DEFAULT_LINK_TYPE),
            ),
        }
    }
}

impl Default for LinkIssueTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for LinkIssueTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    fn build_args(&self, args: &ToolArguments) -> Result<Vec<String>, ToolError> {
        let mut argv = workitem(&["link", "create"]);
        argv.extend([
            "--out".to_string(),
            self.argument(args, "from_issue")?,
            "--in".to_string(),
            self.argument(args, "to_issue")?,
            "--type".to_string(),
            self.argument(args, "link_type")?,
        ]);
        Ok(argv)
    }

    fn format(
        &self,
        args: &ToolArguments,
        outcome: &ExecutionOutcome,
    ) -> Result<ToolResult, ToolError> {
        if !outcome.succeeded {
            return Ok(failed(
                "Error linking work items".to_string(),
                &outcome.stderr,
            ));
        }
        Ok(confirmed(
            format!(
                "Work item {} linked to {} with relationship: \"{}\"",
                self.argument(args, "from_issue")?,
                self.argument(args, "to_issue")?,
                self.argument(args, "link_type")?,
            ),
            &outcome.stdout,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> ToolArguments {
        ToolArguments::new()
            .with("from_issue", "SSAS-1")
            .with("to_issue", "SSAS-2")
    }

    #[test]
    fn test_default_link_type() {
        let argv = LinkIssueTool::new().build_args(&pair()).unwrap();
        assert_eq!(
            argv,
            vec![
                "jira", "workitem", "link", "create", "--out", "SSAS-1", "--in", "SSAS-2",
                "--type", "Relates"
            ]
        );
    }

    #[test]
    fn test_explicit_link_type_with_space() {
        let args = pair().with("link_type", "Blocked by");
        let argv = LinkIssueTool::new().build_args(&args).unwrap();
        assert_eq!(argv.last().map(String::as_str), Some("Blocked by"));
    }

    #[test]
    fn test_empty_link_type_is_forwarded_not_defaulted() {
        let args = pair().with("link_type", "");
        let tool = LinkIssueTool::new();

        let argv = tool.build_args(&args).unwrap();
        assert_eq!(&argv[8..], ["--type", ""]);

        let result = tool.format(&args, &ExecutionOutcome::success("", "")).unwrap();
        assert_eq!(
            result.text_content(),
            "Work item SSAS-1 linked to SSAS-2 with relationship: \"\""
        );
    }

    #[test]
    fn test_success_label_uses_resolved_type() {
        let result = LinkIssueTool::new()
            .format(&pair(), &ExecutionOutcome::success("", ""))
            .unwrap();
        assert_eq!(
            result.text_content(),
            "Work item SSAS-1 linked to SSAS-2 with relationship: \"Relates\""
        );
    }

    #[test]
    fn test_failure_label() {
        let result = LinkIssueTool::new()
            .format(&pair(), &ExecutionOutcome::failure(Some(1), "", "link type not found"))
            .unwrap();
        assert!(result.is_error);
        assert_eq!(result.text_content(), "Error linking work items: link type not found");
    }
}
