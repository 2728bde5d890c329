// ABOUTME: Tests for McpServer - request routing, error codes and the
// ABOUTME: tools/list and tools/call shapes, with a scripted runner.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use super::*;
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::exec::{CommandRunner, ExecutionOutcome};
use crate::tools::jira_registry;

struct FixedRunner(ExecutionOutcome);

#[async_trait]
impl CommandRunner for FixedRunner {
    async fn run(&self, _program: &str, _args: &[String]) -> ExecutionOutcome {
        self.0.clone()
    }
}

fn server(outcome: ExecutionOutcome) -> McpServer {
    McpServer::new(Dispatcher::new(
        Config::default(),
        jira_registry(),
        Arc::new(FixedRunner(outcome)),
    ))
}

async fn roundtrip(server: &McpServer, request: serde_json::Value) -> serde_json::Value {
    let response = server
        .handle_line(&request.to_string())
        .await
        .expect("request should get a response");
    serde_json::to_value(response).unwrap()
}

#[tokio::test]
async fn test_initialize() {
    let server = server(ExecutionOutcome::success("", ""));
    let resp = roundtrip(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2025-03-26",
                "capabilities": {},
                "clientInfo": {"name": "test-client", "version": "0.0.1"}
            }
        }),
    )
    .await;

    assert_eq!(resp["id"], 1);
    assert_eq!(resp["result"]["protocolVersion"], "2025-03-26");
    assert!(resp["result"]["capabilities"]["tools"].is_object());
    assert_eq!(resp["result"]["serverInfo"]["name"], "atlassian-mcp");
}

#[tokio::test]
async fn test_initialize_defaults_protocol_version() {
    let server = server(ExecutionOutcome::success("", ""));
    let resp = roundtrip(&server, json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"})).await;
    assert_eq!(resp["result"]["protocolVersion"], PROTOCOL_VERSION);
}

#[tokio::test]
async fn test_notification_gets_no_response() {
    let server = server(ExecutionOutcome::success("", ""));
    let line = json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string();
    assert!(server.handle_line(&line).await.is_none());
}

#[tokio::test]
async fn test_ping() {
    let server = server(ExecutionOutcome::success("", ""));
    let resp = roundtrip(&server, json!({"jsonrpc": "2.0", "id": "p", "method": "ping"})).await;
    assert_eq!(resp["id"], "p");
    assert_eq!(resp["result"], json!({}));
}

#[tokio::test]
async fn test_tools_list() {
    let server = server(ExecutionOutcome::success("", ""));
    let resp = roundtrip(&server, json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})).await;

    let tools = resp["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 9);
    assert_eq!(tools[0]["name"], "jira_search");
    assert_eq!(tools[0]["inputSchema"]["properties"]["results_limit"]["default"], 10);
    assert_eq!(tools[8]["name"], "jira_link_issue");
    assert_eq!(tools[8]["inputSchema"]["properties"]["link_type"]["default"], "Relates");
}

#[tokio::test]
async fn test_tools_list_is_stable() {
    let server = server(ExecutionOutcome::success("", ""));
    let request = json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"});
    let first = roundtrip(&server, request.clone()).await;
    let second = roundtrip(&server, request).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_tools_call_success() {
    let server = server(ExecutionOutcome::success(r#"{"issues":[]}"#, ""));
    let resp = roundtrip(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {"name": "jira_search", "arguments": {"query": "project = SSAS"}}
        }),
    )
    .await;

    assert_eq!(resp["result"]["isError"], false);
    assert_eq!(
        resp["result"]["content"][0]["text"],
        "Search results for \"project = SSAS\":\n{\"issues\":[]}"
    );
}

#[tokio::test]
async fn test_tools_call_unknown_tool_is_result_not_rpc_error() {
    let server = server(ExecutionOutcome::success("", ""));
    let resp = roundtrip(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": {"name": "jira_frobnicate", "arguments": {}}
        }),
    )
    .await;

    assert!(resp.get("error").is_none());
    assert_eq!(resp["result"]["isError"], true);
    assert_eq!(resp["result"]["content"][0]["text"], "Unknown tool: jira_frobnicate");
}

#[tokio::test]
async fn test_tools_call_without_name_is_invalid_params() {
    let server = server(ExecutionOutcome::success("", ""));
    let resp = roundtrip(
        &server,
        json!({"jsonrpc": "2.0", "id": 5, "method": "tools/call", "params": {"arguments": {}}}),
    )
    .await;
    assert_eq!(resp["error"]["code"], INVALID_PARAMS);

    let resp = roundtrip(&server, json!({"jsonrpc": "2.0", "id": 6, "method": "tools/call"})).await;
    assert_eq!(resp["error"]["code"], INVALID_PARAMS);
}

#[tokio::test]
async fn test_unknown_method() {
    let server = server(ExecutionOutcome::success("", ""));
    let resp = roundtrip(&server, json!({"jsonrpc": "2.0", "id": 7, "method": "resources/list"})).await;
    assert_eq!(resp["error"]["code"], METHOD_NOT_FOUND);
}

#[tokio::test]
async fn test_parse_error() {
    let server = server(ExecutionOutcome::success("", ""));
    let resp = server.handle_line("{not json").await.unwrap();
    let resp = serde_json::to_value(resp).unwrap();

    assert_eq!(resp["id"], serde_json::Value::Null);
    assert_eq!(resp["error"]["code"], PARSE_ERROR);
}

#[tokio::test]
async fn test_invalid_request_keeps_id() {
    let server = server(ExecutionOutcome::success("", ""));
    let resp = roundtrip(&server, json!({"jsonrpc": "2.0", "id": 8, "params": {}})).await;

    assert_eq!(resp["id"], 8);
    assert_eq!(resp["error"]["code"], INVALID_REQUEST);
}

#[tokio::test]
async fn test_null_id_is_invalid_request() {
    let server = server(ExecutionOutcome::success("", ""));
    let resp = roundtrip(&server, json!({"jsonrpc": "2.0", "id": null, "method": "ping"})).await;

    assert_eq!(resp["id"], serde_json::Value::Null);
    assert_eq!(resp["error"]["code"], INVALID_REQUEST);
}
