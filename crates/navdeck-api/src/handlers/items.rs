//! Navigation item handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use navdeck_core::error::AppError;
use navdeck_entity::item::NavigationItem;
use navdeck_entity::ordering::OrderedCollection;

use crate::dto::request::{ArchiveRequest, ItemRequest, ListItemsQuery, ReorderRequest};
use crate::dto::response::{CreatedResponse, MessageResponse};
use crate::extractors::{RowId, ValidatedJson};
use crate::state::AppState;

/// GET /api/items?archived=
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<NavigationItem>>, AppError> {
    let items = state.item_service.list(query.archived).await?;
    Ok(Json(items))
}

/// POST /api/items
pub async fn create_item(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ItemRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = state.item_service.create(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Navigation item created".to_string(),
            id,
        }),
    ))
}

/// PUT /api/items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    RowId(id): RowId,
    ValidatedJson(req): ValidatedJson<ItemRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.item_service.update(id, req.into()).await?;
    Ok(Json(MessageResponse::new("Navigation item updated")))
}

/// DELETE /api/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> Result<Json<MessageResponse>, AppError> {
    state.item_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Navigation item deleted")))
}

/// PUT /api/items/{id}/archive
pub async fn archive_item(
    State(state): State<AppState>,
    RowId(id): RowId,
    ValidatedJson(req): ValidatedJson<ArchiveRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.item_service.set_archived(id, req.is_archived).await?;
    let message = if req.is_archived {
        "Navigation item archived"
    } else {
        "Navigation item restored"
    };
    Ok(Json(MessageResponse::new(message)))
}

/// PUT /api/items/reorder
pub async fn reorder_items(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ReorderRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .reorder
        .reorder(OrderedCollection::NavigationItems, req.items)
        .await?;
    Ok(Json(MessageResponse::new("Order updated")))
}
