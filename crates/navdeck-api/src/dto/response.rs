//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Plain acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Returned with `201 Created`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Human-readable message.
    pub message: String,
    /// ID of the new row.
    pub id: i64,
}

/// `GET /api/secret/check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretStatusResponse {
    /// Whether a secret is configured.
    pub has_secret_key: bool,
}

/// Successful verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Human-readable message.
    pub message: String,
    /// Always `true`.
    pub authenticated: bool,
}

/// Logout result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    /// Human-readable message.
    pub message: String,
    /// Whether a live session was removed.
    pub revoked: bool,
}

/// Countdown toggle result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleResponse {
    /// Human-readable message.
    pub message: String,
    /// New state.
    pub is_active: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub name: String,
    /// Server version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
    /// Live session count.
    pub sessions: usize,
}
