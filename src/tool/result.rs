// ABOUTME: Defines the ToolResult type - ordered text segments plus an
// ABOUTME: error flag, the uniform outcome of every tool call.

/// Result of a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    /// Text segments, in order.
    pub content: Vec<String>,

    /// Whether this result represents an error.
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful single-segment result.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![content.into()],
            is_error: false,
        }
    }

    /// Create a single-segment error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![message.into()],
            is_error: true,
        }
    }

    /// All segments joined by newlines.
    pub fn text_content(&self) -> String {
        self.content.join("\n")
    }
}
