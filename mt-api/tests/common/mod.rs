//! Shared test utilities for integration tests.
#![allow(dead_code)]

use mt_api::DataApi;
use mt_core::config::ServerConfig;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Script path the mock server pretends to host.
pub const SCRIPT: &str = "/mt-data-api.cgi";

/// Server-side path of a versioned API path, e.g. "/sites" →
/// "/mt-data-api.cgi/v2/sites".
pub fn api_path(path: &str) -> String {
    format!("{SCRIPT}/v2{path}")
}

/// Server config pointing at the mock server.
pub fn create_test_config(server: &MockServer) -> ServerConfig {
    ServerConfig::with_base_url(&format!("{}{SCRIPT}", server.uri()))
}

/// Client talking to the mock server with default settings.
pub fn create_test_client(server: &MockServer) -> DataApi {
    DataApi::new(&create_test_config(server)).expect("failed to build test client")
}

/// Client talking to the mock server with adjusted settings.
pub fn create_test_client_with(
    server: &MockServer,
    adjust: impl FnOnce(&mut ServerConfig),
) -> DataApi {
    let mut config = create_test_config(server);
    adjust(&mut config);
    DataApi::new(&config).expect("failed to build test client")
}

/// Client whose requests can never reach a server.
pub fn create_unreachable_client() -> DataApi {
    DataApi::new(&ServerConfig::with_base_url("http://127.0.0.1:9/mt-data-api.cgi"))
        .expect("failed to build test client")
}

/// An `error` envelope as the server sends it.
pub fn error_body(code: u16, message: &str) -> Value {
    json!({ "error": { "code": code, "message": message } })
}

/// A list envelope with `count` numbered items.
pub fn list_body(count: usize, total: i64) -> Value {
    let items: Vec<Value> = (1..=count)
        .map(|id| json!({ "id": id, "title": format!("Item {id}") }))
        .collect();
    json!({ "totalResults": total, "items": items })
}
