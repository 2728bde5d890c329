// ABOUTME: Transport for serving MCP.
// ABOUTME: Newline-delimited JSON-RPC over stdin/stdout or any byte stream pair.

mod stdio;

pub use stdio::StdioTransport;
