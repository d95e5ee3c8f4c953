//! Integration tests for countdown and item CRUD endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_countdown_defaults_icon() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/countdown",
            Some(json!({ "title": "Launch", "target_date": "2031-01-01T09:00" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let list = app.request("GET", "/api/countdown", None, &[]).await;
    assert_eq!(list.body[0]["icon"], json!("far fa-calendar-alt"));
    assert_eq!(list.body[0]["is_active"], json!(true));
}

#[tokio::test]
async fn test_create_countdown_rejects_bad_date() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/countdown",
            Some(json!({ "title": "Launch", "target_date": "someday" })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_is_soft_and_toggle_reactivates() {
    let app = helpers::TestApp::new().await;
    let id = app
        .request(
            "POST",
            "/api/countdown",
            Some(json!({ "title": "Trip", "target_date": "2031-01-01" })),
            &[],
        )
        .await
        .id();

    let response = app
        .request("DELETE", &format!("/api/countdown/{id}"), None, &[])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(app.countdown_order().await.is_empty());

    let response = app
        .request("PATCH", &format!("/api/countdown/{id}/toggle"), None, &[])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["is_active"], json!(true));
    assert_eq!(app.countdown_order().await, vec![id]);
}

#[tokio::test]
async fn test_missing_rows_are_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/api/countdown/42",
            Some(json!({ "title": "x", "target_date": "2031-01-01" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("DELETE", "/api/items/42", None, &[]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("PATCH", "/api/countdown/42/toggle", None, &[])
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_item_archive_round() {
    let app = helpers::TestApp::new().await;
    let id = app.create_item("docs", &[]).await.id();

    let response = app
        .request(
            "PUT",
            &format!("/api/items/{id}/archive"),
            Some(json!({ "is_archived": true })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(app.item_order().await.is_empty());

    let archived = app
        .request("GET", "/api/items?archived=true", None, &[])
        .await;
    assert_eq!(archived.body[0]["id"], json!(id));
    assert_eq!(archived.body[0]["is_archived"], json!(true));
}

#[tokio::test]
async fn test_item_update_and_validation() {
    let app = helpers::TestApp::new().await;
    let id = app.create_item("mail", &[]).await.id();

    let response = app
        .request(
            "PUT",
            &format!("/api/items/{id}"),
            Some(json!({ "title": "Mail", "url": "" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PUT",
            &format!("/api/items/{id}"),
            Some(json!({
                "title": "Mail",
                "url": "https://mail.example",
                "icon": "fas fa-envelope",
            })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let list = app.request("GET", "/api/items", None, &[]).await;
    assert_eq!(list.body[0]["title"], json!("Mail"));
    assert_eq!(list.body[0]["icon"], json!("fas fa-envelope"));
}

#[tokio::test]
async fn test_item_with_unknown_category_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/items",
            Some(json!({ "title": "x", "url": "https://x.example", "category_id": 999 })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("VALIDATION_ERROR"));
    assert!(app.item_order().await.is_empty());

    let id = app.create_item("docs", &[]).await.id();
    let response = app
        .request(
            "PUT",
            &format!("/api/items/{id}"),
            Some(json!({ "title": "docs", "url": "https://docs.example", "category_id": 999 })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_numeric_id_uses_error_body() {
    let app = helpers::TestApp::new().await;

    let cases = [
        ("DELETE", "/api/items/abc", None),
        ("PUT", "/api/items/abc/archive", Some(json!({ "is_archived": true }))),
        ("PATCH", "/api/countdown/abc/toggle", None),
    ];

    for (method, path, body) in cases {
        let response = app.request(method, path, body, &[]).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{method} {path}");
        assert_eq!(response.error_code(), Some("VALIDATION_ERROR"), "{method} {path}");
    }
}
