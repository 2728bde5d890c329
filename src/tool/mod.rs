// ABOUTME: Tool module - tool definitions, argument bags, results, registry.
// ABOUTME: Core abstraction for the capabilities advertised to MCP callers.

mod args;
mod registry;
mod result;
mod traits;

pub use args::*;
pub use registry::*;
pub use result::*;
pub use traits::*;
