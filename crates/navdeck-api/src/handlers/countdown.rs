//! Countdown event handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use navdeck_core::error::AppError;
use navdeck_entity::countdown::CountdownEvent;
use navdeck_entity::ordering::OrderedCollection;

use crate::dto::request::{CountdownRequest, ReorderRequest};
use crate::dto::response::{CreatedResponse, MessageResponse, ToggleResponse};
use crate::extractors::{RowId, ValidatedJson};
use crate::state::AppState;

/// GET /api/countdown
pub async fn list_countdowns(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountdownEvent>>, AppError> {
    let events = state.countdown_service.list_active().await?;
    Ok(Json(events))
}

/// POST /api/countdown
pub async fn create_countdown(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CountdownRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = state.countdown_service.create(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Countdown event created".to_string(),
            id,
        }),
    ))
}

/// PUT /api/countdown/{id}
pub async fn update_countdown(
    State(state): State<AppState>,
    RowId(id): RowId,
    ValidatedJson(req): ValidatedJson<CountdownRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.countdown_service.update(id, req.into()).await?;
    Ok(Json(MessageResponse::new("Countdown event updated")))
}

/// DELETE /api/countdown/{id}
pub async fn delete_countdown(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> Result<Json<MessageResponse>, AppError> {
    state.countdown_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Countdown event deleted")))
}

/// PATCH /api/countdown/{id}/toggle
pub async fn toggle_countdown(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> Result<Json<ToggleResponse>, AppError> {
    let is_active = state.countdown_service.toggle(id).await?;
    Ok(Json(ToggleResponse {
        message: "Countdown event status updated".to_string(),
        is_active,
    }))
}

/// PUT /api/countdown/reorder
pub async fn reorder_countdowns(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ReorderRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .reorder
        .reorder(OrderedCollection::CountdownEvents, req.items)
        .await?;
    Ok(Json(MessageResponse::new("Order updated")))
}
