// ABOUTME: Built-in Jira work item tools backed by the Atlassian CLI.
// ABOUTME: Each tool maps its arguments onto one `acli jira workitem` command.

mod fields;
mod issue;
mod link;
mod search;
mod workflow;

pub use fields::{AddLabelTool, RemoveLabelTool, SetFieldTool};
pub use issue::{CommentTool, GetIssueTool};
pub use link::LinkIssueTool;
pub use search::SearchTool;
pub use workflow::{AssignTool, UpdateStatusTool};

use crate::tool::{ParamKind, ParameterSpec, Registry, ToolResult};

pub const JIRA_SEARCH: &str = "jira_search";
pub const JIRA_GET_ISSUE: &str = "jira_get_issue";
pub const JIRA_COMMENT: &str = "jira_comment";
pub const JIRA_UPDATE_STATUS: &str = "jira_update_status";
pub const JIRA_ASSIGN: &str = "jira_assign";
pub const JIRA_SET_FIELD: &str = "jira_set_field";
pub const JIRA_ADD_LABEL: &str = "jira_add_label";
pub const JIRA_REMOVE_LABEL: &str = "jira_remove_label";
pub const JIRA_LINK_ISSUE: &str = "jira_link_issue";

/// All Jira tools, in advertised order.
pub fn jira_registry() -> Registry {
    Registry::new()
        .with(SearchTool::new())
        .with(GetIssueTool::new())
        .with(CommentTool::new())
        .with(UpdateStatusTool::new())
        .with(AssignTool::new())
        .with(SetFieldTool::new())
        .with(AddLabelTool::new())
        .with(RemoveLabelTool::new())
        .with(LinkIssueTool::new())
}

/// `jira workitem <verb...>` as owned tokens.
fn workitem(verb: &[&str]) -> Vec<String> {
    ["jira", "workitem"]
        .iter()
        .chain(verb)
        .map(|s| s.to_string())
        .collect()
}

/// The `issue_key` parameter shared by every single-item tool.
fn issue_key() -> ParameterSpec {
    ParameterSpec::required(
        "issue_key",
        ParamKind::String,
        "The Jira work item key (e.g., 'SSAS-123' or 'PROJ-456')",
    )
}

/// A label followed by the raw payload on its own line.
fn with_payload(label: String, stdout: &str) -> ToolResult {
    ToolResult::text(format!("{}:\n{}", label, stdout))
}

/// A confirmation label, followed by stdout only when the CLI printed any.
fn confirmed(label: String, stdout: &str) -> ToolResult {
    if stdout.trim().is_empty() {
        ToolResult::text(label)
    } else {
        ToolResult::text(format!("{}\n{}", label, stdout))
    }
}

fn failed(label: String, stderr: &str) -> ToolResult {
    ToolResult::error(format!("{}: {}", label, stderr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_names() {
        assert_eq!(
            jira_registry().list(),
            vec![
                JIRA_SEARCH,
                JIRA_GET_ISSUE,
                JIRA_COMMENT,
                JIRA_UPDATE_STATUS,
                JIRA_ASSIGN,
                JIRA_SET_FIELD,
                JIRA_ADD_LABEL,
                JIRA_REMOVE_LABEL,
                JIRA_LINK_ISSUE,
            ]
        );
    }

    #[test]
    fn test_every_tool_has_schema_and_description() {
        for def in jira_registry().definitions() {
            assert!(!def.description.is_empty(), "{} has no description", def.name);
            let schema = def.input_schema();
            assert_eq!(schema["type"], "object");
            for p in &def.parameters {
                assert!(!p.description.is_empty(), "{}.{} undocumented", def.name, p.name);
                assert!(schema["properties"][p.name].is_object());
            }
        }
    }

    #[test]
    fn test_issue_key_is_declared_alike_everywhere() {
        let expected = issue_key().to_schema();
        let mut declaring = 0;
        for def in jira_registry().definitions() {
            if let Some(spec) = def.find("issue_key") {
                assert!(spec.required, "{} has optional issue_key", def.name);
                assert_eq!(spec.to_schema(), expected, "{} issue_key differs", def.name);
                declaring += 1;
            }
        }
        assert_eq!(declaring, 7);
    }

    #[test]
    fn test_confirmed_appends_only_real_output() {
        assert_eq!(confirmed("Done".into(), " \n").content, vec!["Done".to_string()]);
        assert_eq!(confirmed("Done".into(), "ok\n").content, vec!["Done\nok\n".to_string()]);
    }
}
