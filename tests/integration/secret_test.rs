//! Integration tests for the secret lifecycle endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use navdeck_core::config::AppConfig;

#[tokio::test]
async fn test_check_reflects_setup() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/secret/check", None, &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["hasSecretKey"], json!(false));

    app.setup_secret("abc123").await;

    let response = app.request("GET", "/api/secret/check", None, &[]).await;
    assert_eq!(response.body["hasSecretKey"], json!(true));
}

#[tokio::test]
async fn test_setup_twice_is_already_configured() {
    let app = helpers::TestApp::new().await;
    app.setup_secret("abc123").await;

    let response = app
        .request(
            "POST",
            "/api/secret/setup",
            Some(json!({ "secretKey": "different-secret" })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("ALREADY_CONFIGURED"));
}

#[tokio::test]
async fn test_setup_rejects_short_secret() {
    let app = helpers::TestApp::new().await;

    for candidate in ["", "a", "12345"] {
        let response = app
            .request(
                "POST",
                "/api/secret/setup",
                Some(json!({ "secretKey": candidate })),
                &[],
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{candidate:?}");
        assert_eq!(response.error_code(), Some("VALIDATION_ERROR"));
    }

    let response = app.request("GET", "/api/secret/check", None, &[]).await;
    assert_eq!(response.body["hasSecretKey"], json!(false));
}

#[tokio::test]
async fn test_verify_issues_token() {
    let app = helpers::TestApp::new().await;
    app.setup_secret("abc123").await;

    let response = app
        .request(
            "POST",
            "/api/secret/verify",
            Some(json!({ "secretKey": "abc123" })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["authenticated"], json!(true));
    let token = response.session_token().unwrap();
    assert_eq!(token.len(), 64);
    assert!(app.state.sessions.validate(&token));
}

#[tokio::test]
async fn test_verify_wrong_secret_forbidden() {
    let app = helpers::TestApp::new().await;
    app.setup_secret("abc123").await;

    let response = app
        .request(
            "POST",
            "/api/secret/verify",
            Some(json!({ "secretKey": "abc124" })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.session_token().is_none());
    assert!(app.state.sessions.is_empty());
}

#[tokio::test]
async fn test_verify_without_secret_configured_forbidden() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/secret/verify",
            Some(json!({ "secretKey": "abc123" })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_rotation_keeps_existing_sessions() {
    let app = helpers::TestApp::new().await;
    app.setup_secret("abc123").await;
    let t1 = app.verify("abc123").await;

    let response = app
        .request(
            "POST",
            "/api/secret/change",
            Some(json!({ "currentSecretKey": "abc123", "newSecretKey": "xyz789" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.session_token().is_some());

    let old = app
        .request(
            "POST",
            "/api/secret/verify",
            Some(json!({ "secretKey": "abc123" })),
            &[],
        )
        .await;
    assert_eq!(old.status, StatusCode::FORBIDDEN);
    app.verify("xyz789").await;

    let response = app.create_item("still-allowed", &[("x-session-token", t1.as_str())]).await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_change_rejects_wrong_current_and_short_new() {
    let app = helpers::TestApp::new().await;
    app.setup_secret("abc123").await;

    let response = app
        .request(
            "POST",
            "/api/secret/change",
            Some(json!({ "currentSecretKey": "nope-nope", "newSecretKey": "xyz789" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            "/api/secret/change",
            Some(json!({ "currentSecretKey": "abc123", "newSecretKey": "xyz" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    app.verify("abc123").await;
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app = helpers::TestApp::new().await;
    app.setup_secret("abc123").await;
    let token = app.verify("abc123").await;

    let response = app
        .request("POST", "/api/secret/logout", None, &[("x-session-token", token.as_str())])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["revoked"], json!(true));

    let response = app.create_item("after-logout", &[("x-session-token", token.as_str())]).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_reset_requires_credential_by_default() {
    let app = helpers::TestApp::new().await;
    app.setup_secret("abc123").await;
    let token = app.verify("abc123").await;

    let response = app.request("POST", "/api/secret/reset", None, &[]).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("POST", "/api/secret/reset", None, &[("x-session-token", token.as_str())])
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/secret/check", None, &[]).await;
    assert_eq!(response.body["hasSecretKey"], json!(false));
    assert!(app.state.sessions.is_empty());

    app.setup_secret("brand-new").await;
    let response = app.create_item("locked-again", &[("x-session-token", token.as_str())]).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_reset_with_secret_header_returns_no_token() {
    let app = helpers::TestApp::new().await;
    app.setup_secret("abc123").await;

    let response = app
        .request("POST", "/api/secret/reset", None, &[("x-secret-key", "abc123")])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.session_token().is_none());
    assert!(app.state.sessions.is_empty());
}

#[tokio::test]
async fn test_reset_open_when_configured() {
    let mut config = AppConfig::default();
    config.auth.allow_unauthenticated_reset = true;
    let app = helpers::TestApp::with_config(config).await;
    app.setup_secret("abc123").await;

    let response = app.request("POST", "/api/secret/reset", None, &[]).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/secret/check", None, &[]).await;
    assert_eq!(response.body["hasSecretKey"], json!(false));
}

#[tokio::test]
async fn test_malformed_body_is_validation_error() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/api/secret/setup", Some(json!(["not", "an", "object"])), &[])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("VALIDATION_ERROR"));
}
