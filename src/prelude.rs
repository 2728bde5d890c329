// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use atlassian_mcp::prelude::*;` to get started quickly.

pub use crate::config::{Config, LogLevel};
pub use crate::dispatch::Dispatcher;
pub use crate::error::{ConfigError, Error, McpError, ToolError};
pub use crate::exec::{CommandRunner, ExecutionOutcome, ProcessRunner};
pub use crate::mcp::{McpContentBlock, McpServer, McpToolInfo, McpToolResult, StdioTransport};
pub use crate::tool::{
    ArgValue, ParamKind, ParameterSpec, Registry, Tool, ToolArguments, ToolDefinition, ToolResult,
};
pub use crate::tools::{
    AddLabelTool, AssignTool, CommentTool, GetIssueTool, LinkIssueTool, RemoveLabelTool,
    SearchTool, SetFieldTool, UpdateStatusTool, jira_registry,
};
