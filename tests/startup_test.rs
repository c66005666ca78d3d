mod helpers;

use helpers::{path, test_api_config};
use mockito::Matcher;
use omi_mcp::config::OmiMcpConfig;
use omi_mcp::omi::{ErrorKind, OmiClient};
use omi_mcp::tools::read_memories::ReadMemoriesParams;
use serial_test::serial;
use std::sync::Arc;
use tempfile::TempDir;

fn clear_omi_env() {
    for var in [
        "OMI_API_KEY",
        "OMI_APP_ID",
        "OMI_BASE_URL",
        "OMI_MCP_TRANSPORT",
        "OMI_MCP_LOG_LEVEL",
    ] {
        std::env::remove_var(var);
    }
}

#[test]
fn client_refuses_missing_credentials() {
    let mut config = test_api_config("http://127.0.0.1:9");
    config.api_key.clear();
    let err = OmiClient::new(&config).unwrap_err();
    assert!(err.to_string().contains("OMI_API_KEY"));

    let mut config = test_api_config("http://127.0.0.1:9");
    config.app_id = " ".into();
    let err = OmiClient::new(&config).unwrap_err();
    assert!(err.to_string().contains("OMI_APP_ID"));
}

#[test]
#[serial]
fn load_from_file_then_env() {
    clear_omi_env();
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
[server]
transport = "http"
port = 9100

[omi]
app_id = "file-app"
api_key = "sk_file"
"#,
    )
    .unwrap();

    let config = OmiMcpConfig::load_from(&config_path).unwrap();
    assert_eq!(config.server.transport, "http");
    assert_eq!(config.server.port, 9100);
    assert_eq!(config.omi.app_id, "file-app");
    assert!(config.omi.validate().is_ok());

    std::env::set_var("OMI_APP_ID", "env-app");
    let config = OmiMcpConfig::load_from(&config_path).unwrap();
    assert_eq!(config.omi.app_id, "env-app");
    assert_eq!(config.omi.api_key, "sk_file");

    clear_omi_env();
}

#[test]
#[serial]
fn missing_file_falls_back_to_defaults() {
    clear_omi_env();
    let tmp = TempDir::new().unwrap();
    let config = OmiMcpConfig::load_from(tmp.path().join("absent.toml")).unwrap();
    assert_eq!(config.server.transport, "stdio");
    assert!(config.omi.validate().is_err());
}

#[test]
#[serial]
fn malformed_file_is_an_error() {
    clear_omi_env();
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("config.toml");
    std::fs::write(&config_path, "[omi\napp_id = ").unwrap();
    assert!(OmiMcpConfig::load_from(&config_path).is_err());
}

#[tokio::test]
async fn connection_failure_is_internal_error() {
    // Nothing listens on the discard port.
    let client = OmiClient::new(&test_api_config("http://127.0.0.1:9")).unwrap();
    let query = ReadMemoriesParams {
        user_id: "u1".into(),
        ..Default::default()
    }
    .validate()
    .unwrap();

    let err = client.read_memories(&query).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", path("memories").as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"memories": [{"id": "m1"}]}"#)
        .expect(4)
        .create_async()
        .await;

    let client = Arc::new(OmiClient::new(&test_api_config(&server.url())).unwrap());
    let mut handles = Vec::new();
    for i in 0..4 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            let query = ReadMemoriesParams {
                user_id: format!("u{i}"),
                ..Default::default()
            }
            .validate()
            .unwrap();
            client.read_memories(&query).await
        }));
    }
    for handle in handles {
        let payload = handle.await.unwrap().unwrap();
        assert_eq!(payload["memories"].as_array().unwrap().len(), 1);
    }

    mock.assert_async().await;
}
