// ABOUTME: SearchTool - finds work items with a JQL query.
// ABOUTME: Runs `acli jira workitem search --jql <q> --limit <n> --json`.

use crate::error::ToolError;
use crate::exec::ExecutionOutcome;
use crate::tool::{ParamKind, ParameterSpec, Tool, ToolArguments, ToolDefinition, ToolResult};

use super::{JIRA_SEARCH, failed, with_payload, workitem};

/// Default number of results.
pub const DEFAULT_RESULTS_LIMIT: i64 = 10;

const DESCRIPTION: &str = concat!(
    "Search for Jira work items using JQL (Jira Query Language). Use to find issues by project, ",
    "status, assignee, priority, created/updated dates, and more. Returns a list of matching work ",
    "items with their key, summary, status, priority, and assignee. ",
    "Common search patterns: ",
    "1) My work: 'assignee = currentUser()' ",
    "2) My active work: 'assignee = currentUser() AND status NOT IN (Done, Closed)' ",
    "3) Project issues: 'project = SSAS' ",
    "4) High priority: 'priority = High' or 'priority IN (High, Highest)' ",
    "5) Recent updates: 'updated >= -7d' (last 7 days) ",
    "6) Combine with AND/OR: 'project = SSAS AND status = Open AND assignee = currentUser()' ",
    "7) Sort results: add 'ORDER BY updated DESC' or 'ORDER BY priority DESC, created ASC'",
);

const QUERY_DESCRIPTION: &str = concat!(
    "JQL (Jira Query Language) query string. ",
    "Structure: field operator value [AND/OR field operator value] [ORDER BY field ASC/DESC]. ",
    "Common fields: project, status, assignee, priority, created, updated, summary, description, type. ",
    "Operators: = (equals), != (not equals), IN (list), NOT IN (exclude list), > < >= <= (comparison), ",
    "~ (contains text), IS EMPTY, IS NOT EMPTY. ",
    "Functions: currentUser() (logged in user), now() (current time), startOfDay(), startOfWeek(). ",
    "Time: Use formats like -7d (7 days ago), -2w (2 weeks), -1M (1 month). ",
    "IMPORTANT QUOTING RULES: ",
    "1) Multi-word values MUST be in double quotes: status = \"In Progress\" ",
    "2) Email addresses MUST be quoted: assignee = \"user@example.com\" ",
    "3) Special characters (@, #, $, etc.) MUST be in quoted strings ",
    "4) Use currentUser() function instead of email when possible ",
    "5) List values in parentheses: status IN (Open, \"In Progress\", Blocked) ",
    "Examples: ",
    "'assignee = currentUser() ORDER BY updated DESC' - your work by recent update, ",
    "'project = SSAS AND status = Open' - open issues in SSAS project, ",
    "'priority = High AND status != Done' - high priority incomplete work, ",
    "'assignee = currentUser() AND status NOT IN (Done, Closed)' - your active work, ",
    "'updated >= -7d AND project = SSAS' - SSAS project updated in last 7 days, ",
    "'status IN (\"In Progress\", \"Work in progress\") AND assignee = currentUser()' - in-progress items, ",
    "'assignee = \"user@example.com\" AND priority = High' - specific user's high priority work",
);

/// Tool for JQL searches.
pub struct SearchTool {
    definition: ToolDefinition,
}

impl SearchTool {
    pub fn new() -> Self {
        Self {
            definition: ToolDefinition::new(JIRA_SEARCH, DESCRIPTION)
                .parameter(ParameterSpec::required(
                    "query",
                    ParamKind::String,
                    QUERY_DESCRIPTION,
                ))
                .parameter(
                    ParameterSpec::optional(
                        "results_limit",
                        ParamKind::Number,
                        "Maximum number of results to return (default: 10, max: 100)",
                    )
                    .with_default(DEFAULT_RESULTS_LIMIT),
                ),
        }
    }
}

impl Default for SearchTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for SearchTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    fn build_args(&self, args: &ToolArguments) -> Result<Vec<String>, ToolError> {
        let mut argv = workitem(&["search"]);
        argv.extend([
            "--jql".to_string(),
            self.argument(args, "query")?,
            "--limit".to_string(),
            self.argument(args, "results_limit")?,
            "--json".to_string(),
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
                "Error searching for work items".to_string(),
                &outcome.stderr,
            ));
        }
        let query = self.argument(args, "query")?;
        Ok(with_payload(
            format!("Search results for \"{}\"", query),
            &outcome.stdout,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argv_with_default_limit() {
        let args = ToolArguments::new().with("query", "project = SSAS");
        let argv = SearchTool::new().build_args(&args).unwrap();

        assert_eq!(
            argv,
            vec![
                "jira", "workitem", "search", "--jql", "project = SSAS", "--limit", "10", "--json"
            ]
        );
    }

    #[test]
    fn test_argv_with_explicit_limit() {
        let args = ToolArguments::new()
            .with("query", "assignee = currentUser()")
            .with("results_limit", 50i64);
        let argv = SearchTool::new().build_args(&args).unwrap();

        assert_eq!(argv[6], "50");
    }

    #[test]
    fn test_zero_limit_is_forwarded_not_defaulted() {
        let args = ToolArguments::new()
            .with("query", "project = SSAS")
            .with("results_limit", 0i64);
        let argv = SearchTool::new().build_args(&args).unwrap();

        assert_eq!(argv[6], "0");
    }

    #[test]
    fn test_embedded_quotes_stay_one_token() {
        let jql = r#"status IN (Open, "In Progress") AND assignee = "user@example.com""#;
        let args = ToolArguments::new().with("query", jql);
        let argv = SearchTool::new().build_args(&args).unwrap();

        assert_eq!(argv.len(), 8);
        assert_eq!(argv[4], jql);
    }

    #[test]
    fn test_success_echoes_query_and_payload() {
        let tool = SearchTool::new();
        let args = ToolArguments::new().with("query", "project = SSAS");
        let outcome = ExecutionOutcome::success(r#"{"issues":[]}"#, "");

        let result = tool.format(&args, &outcome).unwrap();
        assert!(!result.is_error);
        assert_eq!(
            result.content,
            vec!["Search results for \"project = SSAS\":\n{\"issues\":[]}".to_string()]
        );
    }

    #[test]
    fn test_failure_uses_stderr() {
        let tool = SearchTool::new();
        let args = ToolArguments::new().with("query", "project = ");
        let outcome = ExecutionOutcome::failure(Some(1), "", "JQL parse error");

        let result = tool.format(&args, &outcome).unwrap();
        assert!(result.is_error);
        assert_eq!(result.text_content(), "Error searching for work items: JQL parse error");
    }
}
