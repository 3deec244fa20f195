mod common;

use serde_json::Value;

#[tokio::test]
async fn test_redirect_success() {
    let server = common::make_server();
    common::register_user(&server, "owner@example.com", "Owner").await;
    let created =
        common::create_url(&server, "https://example.com/target", "owner@example.com").await;
    let code = created["short_url"].as_str().unwrap();

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_tracks_click() {
    let server = common::make_server();
    common::register_user(&server, "owner@example.com", "Owner").await;
    let created = common::create_url(&server, "https://example.com", "owner@example.com").await;
    let code = created["short_url"].as_str().unwrap();

    server
        .get(&format!("/{code}"))
        .add_header("User-Agent", "redirect-test")
        .await;
    server.get(&format!("/{code}")).await;

    let resolved = server.get(&format!("/api/url/{code}")).await.json::<Value>();
    assert_eq!(resolved["click_count"], 2);

    let stats = server
        .get(&format!("/api/url/{code}/stats"))
        .await
        .json::<Vec<Value>>();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0]["ip"], common::PEER_IP);
    assert_eq!(stats[0]["user_agent"], "redirect-test");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::make_server();

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
}
