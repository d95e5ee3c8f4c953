//! Integration tests for batch reordering.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

async fn seeded_items(app: &helpers::TestApp, n: usize) -> Vec<i64> {
    let mut ids = Vec::new();
    for i in 0..n {
        ids.push(app.create_item(&format!("item{i}"), &[]).await.id());
    }
    ids
}

#[tokio::test]
async fn test_reorder_items_applies_positions() {
    let app = helpers::TestApp::new().await;
    let ids = seeded_items(&app, 3).await;
    assert_eq!(app.item_order().await, ids);

    let response = app
        .request(
            "PUT",
            "/api/items/reorder",
            Some(json!({ "items": [
                { "id": ids[2], "sort_order": 1 },
                { "id": ids[0], "sort_order": 2 },
                { "id": ids[1], "sort_order": 3 },
            ]})),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.item_order().await, vec![ids[2], ids[0], ids[1]]);
}

#[tokio::test]
async fn test_reorder_retry_is_idempotent() {
    let app = helpers::TestApp::new().await;
    let ids = seeded_items(&app, 3).await;
    let body = json!({ "items": [
        { "id": ids[1], "sort_order": 1 },
        { "id": ids[2], "sort_order": 2 },
        { "id": ids[0], "sort_order": 3 },
    ]});

    let first = app
        .request("PUT", "/api/items/reorder", Some(body.clone()), &[])
        .await;
    let order_after_first = app.item_order().await;
    let second = app.request("PUT", "/api/items/reorder", Some(body), &[]).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(app.item_order().await, order_after_first);
}

#[tokio::test]
async fn test_reorder_with_unknown_id_changes_nothing() {
    let app = helpers::TestApp::new().await;
    let ids = seeded_items(&app, 2).await;

    let response = app
        .request(
            "PUT",
            "/api/items/reorder",
            Some(json!({ "items": [
                { "id": ids[1], "sort_order": 1 },
                { "id": 9999, "sort_order": 2 },
            ]})),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), Some("NOT_FOUND"));
    assert_eq!(app.item_order().await, ids);
}

#[tokio::test]
async fn test_reorder_rejects_empty_duplicate_and_malformed() {
    let app = helpers::TestApp::new().await;
    let ids = seeded_items(&app, 2).await;

    let bodies = [
        json!({ "items": [] }),
        json!({ "items": [
            { "id": ids[0], "sort_order": 1 },
            { "id": ids[0], "sort_order": 2 },
        ]}),
        json!({ "items": "not-a-list" }),
        json!({}),
    ];

    for body in bodies {
        let response = app
            .request("PUT", "/api/items/reorder", Some(body.clone()), &[])
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
    }
    assert_eq!(app.item_order().await, ids);
}

#[tokio::test]
async fn test_reorder_countdowns() {
    let app = helpers::TestApp::new().await;
    let mut ids = Vec::new();
    for title in ["a", "b"] {
        let response = app
            .request(
                "POST",
                "/api/countdown",
                Some(json!({ "title": title, "target_date": "2031-06-01" })),
                &[],
            )
            .await;
        ids.push(response.id());
    }

    let response = app
        .request(
            "PUT",
            "/api/countdown/reorder",
            Some(json!({ "items": [
                { "id": ids[1], "sort_order": 1 },
                { "id": ids[0], "sort_order": 2 },
            ]})),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.countdown_order().await, vec![ids[1], ids[0]]);
}

#[tokio::test]
async fn test_reorder_behind_gate_with_session() {
    let app = helpers::TestApp::new().await;
    let ids = seeded_items(&app, 2).await;
    app.setup_secret("abc123").await;
    let token = app.verify("abc123").await;

    let response = app
        .request(
            "PUT",
            "/api/items/reorder",
            Some(json!({ "items": [
                { "id": ids[1], "sort_order": 1 },
                { "id": ids[0], "sort_order": 2 },
            ]})),
            &[("x-session-token", token.as_str())],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.item_order().await, vec![ids[1], ids[0]]);
}
