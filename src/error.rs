// ABOUTME: Defines all error types for the atlassian-mcp library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under Error.

/// Top-level error type for the atlassian-mcp library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("MCP error: {0}")]
    Mcp(#[from] McpError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while resolving or preparing a tool call.
///
/// None of these escape the dispatcher: each one is folded into an error
/// `ToolResult` for the caller.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("missing required argument `{name}` for tool `{tool}`")]
    MissingArgument { tool: String, name: String },

    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("{0}")]
    Unexpected(String),
}

/// Errors from the MCP server loop.
#[derive(Debug, thiserror::Error)]
pub enum McpError {
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid log level '{0}' (expected one of: trace, debug, info, warn, error)")]
    InvalidLogLevel(String),
}
