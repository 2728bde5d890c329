// ABOUTME: MCP module - Model Context Protocol server side.
// ABOUTME: Answers initialize, tools/list and tools/call over stdio.

mod server;
mod transport;
mod types;

pub use server::McpServer;
pub use transport::StdioTransport;
pub use types::*;

#[cfg(test)]
mod server_test;
#[cfg(test)]
mod types_test;
