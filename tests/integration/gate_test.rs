//! Integration tests for the auth gate on mutating endpoints.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;

use navdeck_core::config::AppConfig;

#[tokio::test]
async fn test_bootstrap_allows_mutation_until_setup() {
    let app = helpers::TestApp::new().await;

    let response = app.create_item("before-setup", &[]).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.session_token().is_none());

    app.setup_secret("abc123").await;

    let response = app.create_item("after-setup", &[]).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("UNAUTHORIZED"));
}

#[tokio::test]
async fn test_reads_stay_public() {
    let app = helpers::TestApp::new().await;
    app.setup_secret("abc123").await;

    for path in ["/api/items", "/api/items?archived=true", "/api/countdown", "/api/health"] {
        let response = app.request("GET", path, None, &[]).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn test_secret_header_issues_renewed_token() {
    let app = helpers::TestApp::new().await;
    app.setup_secret("abc123").await;

    let response = app.create_item("with-secret", &[("x-secret-key", "abc123")]).await;
    assert_eq!(response.status, StatusCode::CREATED);
    let token = response.session_token().expect("Gate should issue a token");

    let response = app.create_item("with-token", &[("x-session-token", token.as_str())]).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.session_token().is_none());
}

#[tokio::test]
async fn test_wrong_secret_is_forbidden() {
    let app = helpers::TestApp::new().await;
    app.setup_secret("abc123").await;

    let response = app.create_item("nope", &[("x-secret-key", "wrong-secret")]).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(app.item_order().await.is_empty());
}

#[tokio::test]
async fn test_unknown_token_is_unauthorized() {
    let app = helpers::TestApp::new().await;
    app.setup_secret("abc123").await;

    let response = app.create_item("nope", &[("x-session-token", "deadbeef")]).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_expires_after_ttl() {
    let app = helpers::TestApp::new().await;
    app.setup_secret("abc123").await;
    let token = app.verify("abc123").await;

    app.clock.advance(Duration::hours(23));
    let response = app.create_item("in-time", &[("x-session-token", token.as_str())]).await;
    assert_eq!(response.status, StatusCode::CREATED);

    app.clock.advance(Duration::hours(2));
    let response = app.create_item("too-late", &[("x-session-token", token.as_str())]).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(app.state.sessions.get(&token).is_none());
}

#[tokio::test]
async fn test_every_mutation_is_gated() {
    let app = helpers::TestApp::new().await;
    let id = app.create_item("seed", &[]).await.id();
    app.setup_secret("abc123").await;

    let item = json!({ "title": "t", "url": "https://t.example" });
    let countdown = json!({ "title": "t", "target_date": "2030-01-01" });
    let reorder = json!({ "items": [{ "id": id, "sort_order": 1 }] });
    let cases = [
        ("POST", "/api/items".to_string(), Some(item.clone())),
        ("PUT", format!("/api/items/{id}"), Some(item)),
        ("DELETE", format!("/api/items/{id}"), None),
        ("PUT", format!("/api/items/{id}/archive"), Some(json!({ "is_archived": true }))),
        ("PUT", "/api/items/reorder".to_string(), Some(reorder.clone())),
        ("POST", "/api/countdown".to_string(), Some(countdown.clone())),
        ("PUT", "/api/countdown/1".to_string(), Some(countdown)),
        ("DELETE", "/api/countdown/1".to_string(), None),
        ("PATCH", "/api/countdown/1/toggle".to_string(), None),
        ("PUT", "/api/countdown/reorder".to_string(), Some(reorder)),
    ];

    for (method, path, body) in cases {
        let response = app.request(method, &path, body, &[]).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
    }
}

#[tokio::test]
async fn test_mutation_auth_can_be_disabled() {
    let mut config = AppConfig::default();
    config.auth.require_auth_on_mutation = false;
    let app = helpers::TestApp::with_config(config).await;
    app.setup_secret("abc123").await;

    let response = app.create_item("open", &[]).await;
    assert_eq!(response.status, StatusCode::CREATED);
}
