#![allow(dead_code)]

use omi_mcp::config::OmiApiConfig;
use omi_mcp::omi::OmiClient;

pub const TEST_API_KEY: &str = "sk_test_123";
pub const TEST_APP_ID: &str = "app-test";

/// API config pointing at a local mock server.
pub fn test_api_config(base_url: &str) -> OmiApiConfig {
    OmiApiConfig {
        base_url: base_url.to_string(),
        api_key: TEST_API_KEY.to_string(),
        app_id: TEST_APP_ID.to_string(),
        timeout_secs: Some(5),
    }
}

/// Client wired to `server`.
pub fn test_client(server: &mockito::ServerGuard) -> OmiClient {
    OmiClient::new(&test_api_config(&server.url())).unwrap()
}

/// Full request path for an integrations endpoint, e.g. `path("memories")`.
pub fn path(suffix: &str) -> String {
    format!("/v2/integrations/{TEST_APP_ID}/{suffix}")
}

pub fn bearer() -> String {
    format!("Bearer {TEST_API_KEY}")
}
