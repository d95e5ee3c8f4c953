//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use navdeck_api::{AppState, build_app};
use navdeck_core::config::AppConfig;
use navdeck_core::traits::ManualClock;
use navdeck_database::DatabasePool;
use navdeck_database::migration::run_migrations;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for inspecting sessions and services directly
    pub state: AppState,
    /// Clock driving session expiry
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub async fn new() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    /// Create a new test application over a fresh in-memory database
    pub async fn with_config(config: AppConfig) -> Self {
        let db = DatabasePool::in_memory()
            .await
            .expect("Failed to open in-memory database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let clock = Arc::new(ManualClock::default());
        let state =
            AppState::build(config, db, clock.clone()).expect("Failed to build app state");
        let router = build_app(state.clone());

        Self {
            router,
            state,
            clock,
        }
    }

    /// Configure the secret through the API
    pub async fn setup_secret(&self, secret: &str) {
        let response = self
            .request(
                "POST",
                "/api/secret/setup",
                Some(json!({ "secretKey": secret })),
                &[],
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Setup failed: {:?}",
            response.body
        );
    }

    /// Verify the secret and return the issued session token
    pub async fn verify(&self, secret: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/secret/verify",
                Some(json!({ "secretKey": secret })),
                &[],
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Verify failed: {:?}",
            response.body
        );
        response
            .session_token()
            .expect("No x-session-token on verify response")
    }

    /// Create a navigation item, returning the response
    pub async fn create_item(&self, title: &str, headers: &[(&str, &str)]) -> TestResponse {
        self.request(
            "POST",
            "/api/items",
            Some(json!({ "title": title, "url": format!("https://{title}.example") })),
            headers,
        )
        .await
    }

    /// IDs of the visible items in display order
    pub async fn item_order(&self) -> Vec<i64> {
        let response = self.request("GET", "/api/items", None, &[]).await;
        ids(&response.body)
    }

    /// IDs of the active countdowns in display order
    pub async fn countdown_order(&self) -> Vec<i64> {
        let response = self.request("GET", "/api/countdown", None, &[]).await;
        ids(&response.body)
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body as JSON
    pub body: Value,
}

impl TestResponse {
    /// The `x-session-token` response header, if any
    pub fn session_token(&self) -> Option<String> {
        self.headers
            .get("x-session-token")
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    }

    /// The machine-readable error code
    pub fn error_code(&self) -> Option<&str> {
        self.body.get("code").and_then(|v| v.as_str())
    }

    /// The `id` field of a create response
    pub fn id(&self) -> i64 {
        self.body
            .get("id")
            .and_then(|v| v.as_i64())
            .expect("No id in response")
    }
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|row| row["id"].as_i64().expect("Row without id"))
        .collect()
}
