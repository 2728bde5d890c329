// ABOUTME: McpServer - routes JSON-RPC requests to the Dispatcher.
// ABOUTME: Handles initialize, ping, tools/list and tools/call.

use serde_json::Value;
use tracing::{debug, warn};

use super::{
    McpImplementationInfo, McpInitializeParams, McpInitializeResult, McpMessage, McpResponse,
    McpRpcError, McpServerCapabilities, McpToolCallParams, McpToolInfo, McpToolResult,
    McpToolsListResult, PROTOCOL_VERSION,
};
use crate::dispatch::Dispatcher;

/// Name advertised in `serverInfo`.
pub const SERVER_NAME: &str = "atlassian-mcp";

/// Protocol front end for a Dispatcher.
#[derive(Clone)]
pub struct McpServer {
    dispatcher: Dispatcher,
    info: McpImplementationInfo,
}

impl McpServer {
    /// Create a server around a dispatcher.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            info: McpImplementationInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// The server's name and version.
    pub fn info(&self) -> &McpImplementationInfo {
        &self.info
    }

    /// Handle one raw line of input.
    pub async fn handle_line(&self, line: &str) -> Option<McpResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "unparseable message");
                return Some(McpResponse::failure(
                    Value::Null,
                    McpRpcError::parse_error(e.to_string()),
                ));
            }
        };

        if value.get("id").is_some_and(Value::is_null) {
            return Some(McpResponse::failure(
                Value::Null,
                McpRpcError::invalid_request("request id must not be null"),
            ));
        }

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<McpMessage>(value) {
            Ok(message) => self.handle(message).await,
            Err(e) => Some(McpResponse::failure(
                id,
                McpRpcError::invalid_request(e.to_string()),
            )),
        }
    }

    /// Handle one decoded message. Notifications produce no response.
    pub async fn handle(&self, message: McpMessage) -> Option<McpResponse> {
        let Some(id) = message.id else {
            debug!(method = %message.method, "notification");
            return None;
        };

        debug!(method = %message.method, %id, "request");
        let result = match message.method.as_str() {
            "initialize" => self.initialize(message.params),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => self.list_tools(),
            "tools/call" => self.call_tool(message.params).await,
            other => Err(McpRpcError::method_not_found(other)),
        };

        Some(match result {
            Ok(value) => McpResponse::success(id, value),
            Err(error) => McpResponse::failure(id, error),
        })
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, McpRpcError> {
        let params: McpInitializeParams = match params {
            Some(p) => serde_json::from_value(p)
                .map_err(|e| McpRpcError::invalid_params(e.to_string()))?,
            None => McpInitializeParams::default(),
        };

        if let Some(client) = &params.client_info {
            debug!(client = %client.name, version = %client.version, "client connected");
        }

        let result = McpInitializeResult {
            protocol_version: params
                .protocol_version
                .unwrap_or_else(|| PROTOCOL_VERSION.to_string()),
            capabilities: McpServerCapabilities {
                tools: Some(serde_json::json!({})),
            },
            server_info: self.info.clone(),
        };
        to_value(&result)
    }

    fn list_tools(&self) -> Result<Value, McpRpcError> {
        let tools = self
            .dispatcher
            .list_tools()
            .iter()
            .map(McpToolInfo::from)
            .collect();
        to_value(&McpToolsListResult { tools })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, McpRpcError> {
        let params: McpToolCallParams = params
            .ok_or_else(|| McpRpcError::invalid_params("tools/call requires params"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| McpRpcError::invalid_params(e.to_string()))
            })?;

        let result = self
            .dispatcher
            .execute(&params.name, params.arguments)
            .await;
        to_value(&McpToolResult::from(result))
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, McpRpcError> {
    serde_json::to_value(value).map_err(|e| McpRpcError::internal(e.to_string()))
}
