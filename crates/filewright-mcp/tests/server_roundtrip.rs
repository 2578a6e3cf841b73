//! In-process client/server round trips over duplex pipes.

use filewright_core::FilewrightConfig;
use filewright_mcp::FilewrightServer;
use rmcp::model::CallToolResult;
use rmcp::service::{RoleClient, RunningService};
use rmcp::transport::async_rw::AsyncRwTransport;
use rmcp::ServiceExt;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

async fn connect() -> RunningService<RoleClient, ()> {
    let (client_read, server_write) = tokio::io::duplex(64 * 1024);
    let (server_read, client_write) = tokio::io::duplex(64 * 1024);

    let server = FilewrightServer::from_config(&FilewrightConfig::default());
    tokio::spawn(async move {
        if let Ok(service) = server
            .serve(AsyncRwTransport::new(server_read, server_write))
            .await
        {
            let _ = service.waiting().await;
        }
    });

    ()
        .serve(AsyncRwTransport::new(client_read, client_write))
        .await
        .expect("client should connect")
}

async fn call(
    client: &RunningService<RoleClient, ()>,
    name: &str,
    arguments: serde_json::Value,
) -> CallToolResult {
    let request = serde_json::from_value(json!({
        "name": name,
        "arguments": arguments,
    }))
    .expect("valid call request");

    client
        .peer()
        .call_tool(request)
        .await
        .expect("call_tool should not be a protocol error")
}

fn text(result: &CallToolResult) -> String {
    result.content[0]
        .as_text()
        .map(|t| t.text.clone())
        .expect("text content")
}

#[tokio::test]
async fn test_lists_all_tools_with_schemas() {
    let client = connect().await;

    let tools = client.peer().list_all_tools().await.expect("list tools");
    let mut names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
    names.sort();

    assert_eq!(
        names,
        vec![
            "file_info",
            "find_files",
            "list_directory",
            "modify_file",
            "read_file",
            "update_json",
            "update_parameter",
            "view_file",
        ]
    );

    let find = tools.iter().find(|t| t.name == "find_files").unwrap();
    assert!(find.input_schema.contains_key("properties"));

    let _ = client.cancel().await;
}

#[tokio::test]
async fn test_find_then_edit() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "").unwrap();
    fs::create_dir_all(dir.path().join("b").join("d")).unwrap();
    fs::write(dir.path().join("b").join("c.log"), "").unwrap();
    fs::write(dir.path().join("b").join("d").join("e.txt"), "").unwrap();
    fs::write(dir.path().join("server.properties"), "port=8080\n").unwrap();

    let client = connect().await;

    let found = call(
        &client,
        "find_files",
        json!({"root": dir.path(), "pattern": r"\.txt$", "max_depth": 1}),
    )
    .await;
    assert_eq!(found.is_error, Some(false));
    assert_eq!(text(&found), dir.path().join("a.txt").display().to_string());

    let edited = call(
        &client,
        "update_parameter",
        json!({
            "path": dir.path().join("server.properties"),
            "match_pattern": r"port=\d+",
            "replacement": "port=9090"
        }),
    )
    .await;
    assert_eq!(edited.is_error, Some(false));
    assert!(text(&edited).contains("Replaced 1 occurrence"));
    assert_eq!(
        fs::read_to_string(dir.path().join("server.properties")).unwrap(),
        "port=9090\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("server.properties.bak")).unwrap(),
        "port=8080\n"
    );

    let _ = client.cancel().await;
}

#[tokio::test]
async fn test_tool_failure_is_error_result() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("ghost.txt");
    let client = connect().await;

    let result = call(&client, "view_file", json!({"path": missing})).await;

    assert_eq!(result.is_error, Some(true));
    assert!(text(&result).starts_with("Not found:"));
    assert!(!missing.exists());

    // the server keeps serving after a failed call
    let listing = call(&client, "list_directory", json!({"path": dir.path()})).await;
    assert_eq!(text(&listing), "Directories:\n  (none)\n\nFiles:\n  (none)");

    let _ = client.cancel().await;
}
