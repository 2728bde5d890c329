// ABOUTME: Root module for atlassian-mcp - exposes Jira work item operations
// ABOUTME: as MCP tools backed by the Atlassian CLI. Re-exports public types.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod exec;
pub mod mcp;
pub mod prelude;
pub mod tool;
pub mod tools;

pub use error::Error;
