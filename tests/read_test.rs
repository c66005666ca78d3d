mod helpers;

use helpers::{bearer, path, test_client};
use mockito::Matcher;
use omi_mcp::omi::ErrorKind;
use omi_mcp::tools::read_conversations::ReadConversationsParams;
use omi_mcp::tools::read_memories::ReadMemoriesParams;
use serde_json::json;

#[tokio::test]
async fn read_memories_preserves_remote_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", path("memories").as_str())
        .match_query(Matcher::Exact("uid=u1&limit=5&offset=0".into()))
        .match_header("authorization", bearer().as_str())
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "memories": [
                    {"id": "m3", "content": "likes tea", "tags": ["food"]},
                    {"id": "m1", "content": "lives in Lisbon"},
                    {"id": "m2", "content": "has a dog"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let query = ReadMemoriesParams {
        user_id: "u1".into(),
        limit: Some(5),
        offset: Some(0),
    }
    .validate()
    .unwrap();
    let payload = test_client(&server).read_memories(&query).await.unwrap();

    let memories = payload["memories"].as_array().unwrap();
    assert!(memories.len() <= 5);
    let ids: Vec<&str> = memories.iter().map(|m| m["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["m3", "m1", "m2"]);
    // records are relayed untouched
    assert_eq!(memories[0]["tags"], json!(["food"]));
    mock.assert_async().await;
}

#[tokio::test]
async fn read_memories_without_offset_sends_no_offset() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", path("memories").as_str())
        .match_query(Matcher::Exact("uid=u1".into()))
        .with_status(200)
        .with_body(r#"{"memories": []}"#)
        .create_async()
        .await;

    let query = ReadMemoriesParams {
        user_id: "u1".into(),
        ..Default::default()
    }
    .validate()
    .unwrap();
    let payload = test_client(&server).read_memories(&query).await.unwrap();

    assert_eq!(payload, json!({"memories": []}));
    mock.assert_async().await;
}

#[tokio::test]
async fn read_conversations_forwards_all_filters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", path("conversations").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("uid".into(), "u1".into()),
            Matcher::UrlEncoded("limit".into(), "2000".into()),
            Matcher::UrlEncoded("offset".into(), "10".into()),
            Matcher::UrlEncoded("include_discarded".into(), "true".into()),
            Matcher::UrlEncoded("statuses".into(), "processing,completed".into()),
        ]))
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body(
            json!({
                "conversations": [{
                    "id": "c1",
                    "created_at": "2024-01-01T00:00:00Z",
                    "structured": {"title": "Standup", "overview": "Daily sync"},
                    "transcript_segments": [{"text": "hi", "start_time": 0.0, "end_time": 1.5}],
                    "geolocation": {"latitude": 38.7, "longitude": -9.1}
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let query = ReadConversationsParams {
        user_id: "u1".into(),
        limit: Some(2000),
        offset: Some(10),
        include_discarded: Some(true),
        statuses: Some("processing,completed".into()),
    }
    .validate()
    .unwrap();
    let payload = test_client(&server)
        .read_conversations(&query)
        .await
        .unwrap();

    let conversations = payload["conversations"].as_array().unwrap();
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0]["structured"]["title"], "Standup");
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_conversations_key_maps_to_empty_list() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", path("conversations").as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;

    let query = ReadConversationsParams {
        user_id: "u1".into(),
        ..Default::default()
    }
    .validate()
    .unwrap();
    let payload = test_client(&server)
        .read_conversations(&query)
        .await
        .unwrap();

    assert_eq!(payload, json!({"conversations": []}));
}

#[tokio::test]
async fn remote_404_becomes_remote_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", path("memories").as_str())
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("not found")
        .create_async()
        .await;

    let query = ReadMemoriesParams {
        user_id: "u1".into(),
        ..Default::default()
    }
    .validate()
    .unwrap();
    let err = test_client(&server)
        .read_memories(&query)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Remote);
    let msg = err.to_string();
    assert!(msg.contains("404"), "got: {msg}");
    assert!(msg.contains("not found"), "got: {msg}");
}

#[tokio::test]
async fn remote_error_with_empty_body_still_reports_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", path("conversations").as_str())
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let query = ReadConversationsParams {
        user_id: "u1".into(),
        ..Default::default()
    }
    .validate()
    .unwrap();
    let err = test_client(&server)
        .read_conversations(&query)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Remote);
    assert!(err.to_string().contains("500 Internal Server Error"));
}

#[tokio::test]
async fn malformed_json_is_internal_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", path("memories").as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let query = ReadMemoriesParams {
        user_id: "u1".into(),
        ..Default::default()
    }
    .validate()
    .unwrap();
    let err = test_client(&server)
        .read_memories(&query)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[tokio::test]
async fn invalid_params_never_reach_the_api() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = ReadMemoriesParams {
        user_id: String::new(),
        limit: Some(5),
        offset: None,
    }
    .validate()
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("user_id"));

    mock.assert_async().await;
}
