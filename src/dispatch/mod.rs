// ABOUTME: Dispatch module - turns a tool name plus argument bag into one
// ABOUTME: external CLI invocation and a uniform ToolResult.

mod dispatcher;

pub use dispatcher::Dispatcher;
