// ABOUTME: Defines ToolDefinition and the Tool trait - the declared schema of
// ABOUTME: a capability plus pure argument-vector and result builders.

use crate::error::ToolError;
use crate::exec::ExecutionOutcome;

use super::{ParameterSpec, ToolArguments, ToolResult};

/// Static description of one tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ParameterSpec>,
}

impl ToolDefinition {
    /// Create a definition with no parameters.
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            parameters: Vec::new(),
        }
    }

    /// Append a parameter.
    pub fn parameter(mut self, spec: ParameterSpec) -> Self {
        self.parameters.push(spec);
        self
    }

    /// Look up a declared parameter.
    pub fn find(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// JSON Schema for the tool's input, in MCP `inputSchema` form.
    pub fn input_schema(&self) -> serde_json::Value {
        let properties: serde_json::Map<String, serde_json::Value> = self
            .parameters
            .iter()
            .map(|p| (p.name.to_string(), p.to_schema()))
            .collect();
        let required: Vec<&str> = self
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// A tool backed by one external CLI invocation.
///
/// Both builders are pure so each tool can be tested without a process.
pub trait Tool: Send + Sync {
    /// The tool's static definition.
    fn definition(&self) -> &ToolDefinition;

    /// Build the argument vector, excluding the program name.
    fn build_args(&self, args: &ToolArguments) -> Result<Vec<String>, ToolError>;

    /// Turn the process outcome into the caller-facing result.
    fn format(
        &self,
        args: &ToolArguments,
        outcome: &ExecutionOutcome,
    ) -> Result<ToolResult, ToolError>;

    /// Returns the unique name of this tool.
    fn name(&self) -> &str {
        self.definition().name
    }

    /// Resolve a declared parameter to text, applying its default.
    fn argument(&self, args: &ToolArguments, name: &str) -> Result<String, ToolError> {
        let definition = self.definition();
        let spec = definition.find(name).ok_or_else(|| {
            ToolError::Unexpected(format!(
                "tool `{}` declares no parameter `{}`",
                definition.name, name
            ))
        })?;
        args.resolve(definition.name, spec)?
            .ok_or_else(|| ToolError::MissingArgument {
                tool: definition.name.to_string(),
                name: name.to_string(),
            })
    }
}
