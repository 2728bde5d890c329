// ABOUTME: Tests for MCP types - serialization, deserialization.
// ABOUTME: Verifies JSON format matches MCP protocol.

use super::*;
use crate::tool::{ParamKind, ParameterSpec, ToolDefinition, ToolResult};

#[test]
fn test_message_request_deserialization() {
    let json = r#"{"jsonrpc":"2.0","id":7,"method":"tools/list"}"#;
    let msg: McpMessage = serde_json::from_str(json).unwrap();

    assert_eq!(msg.method, "tools/list");
    assert_eq!(msg.id, Some(serde_json::json!(7)));
    assert!(msg.params.is_none());
    assert!(!msg.is_notification());
}

#[test]
fn test_message_notification_has_no_id() {
    let json = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
    let msg: McpMessage = serde_json::from_str(json).unwrap();
    assert!(msg.is_notification());
}

#[test]
fn test_string_ids_survive() {
    let json = r#"{"jsonrpc":"2.0","id":"abc-1","method":"ping"}"#;
    let msg: McpMessage = serde_json::from_str(json).unwrap();
    let resp = McpResponse::success(msg.id.unwrap(), serde_json::json!({}));

    let out = serde_json::to_value(&resp).unwrap();
    assert_eq!(out["id"], "abc-1");
}

#[test]
fn test_success_response_serialization() {
    let resp = McpResponse::success(serde_json::json!(1), serde_json::json!({"tools": []}));
    let json = serde_json::to_value(&resp).unwrap();

    assert_eq!(json["jsonrpc"], "2.0");
    assert_eq!(json["id"], 1);
    assert!(json["result"].is_object());
    assert!(json.get("error").is_none());
}

#[test]
fn test_error_response_serialization() {
    let resp = McpResponse::failure(serde_json::json!(3), McpRpcError::method_not_found("foo"));
    let json = serde_json::to_value(&resp).unwrap();

    assert!(json.get("result").is_none());
    assert_eq!(json["error"]["code"], METHOD_NOT_FOUND);
    assert_eq!(json["error"]["message"], "Method not found: foo");
}

#[test]
fn test_tool_info_from_definition() {
    let def = ToolDefinition::new("jira_get_issue", "View a work item").parameter(
        ParameterSpec::required("issue_key", ParamKind::String, "Work item key"),
    );
    let info = McpToolInfo::from(&def);
    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(json["name"], "jira_get_issue");
    assert_eq!(json["description"], "View a work item");
    assert_eq!(json["inputSchema"]["required"], serde_json::json!(["issue_key"]));
}

#[test]
fn test_tool_result_serialization() {
    let result = McpToolResult::from(ToolResult::error("Unknown tool: nope"));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["isError"], true);
    assert_eq!(json["content"][0]["type"], "text");
    assert_eq!(json["content"][0]["text"], "Unknown tool: nope");
}

#[test]
fn test_tool_call_params_without_arguments() {
    let params: McpToolCallParams = serde_json::from_str(r#"{"name":"jira_search"}"#).unwrap();
    assert_eq!(params.name, "jira_search");
    assert!(params.arguments.is_none());
}

#[test]
fn test_initialize_params_lenient() {
    let params: McpInitializeParams = serde_json::from_str("{}").unwrap();
    assert!(params.protocol_version.is_none());
    assert!(params.client_info.is_none());
}
