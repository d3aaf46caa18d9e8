use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::database::models::{Item, NewItem};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/items/:categoryId - Items of one category, insertion order (public)
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.store.list_items_by_category(category_id).await?;
    Ok(Json(items))
}

/// POST /api/items - Create an item under the supplied category (admin)
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewItem>,
) -> Result<Json<Value>, ApiError> {
    let id = state.store.create_item(&body).await?;
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/items/:id - Remove one item (admin). Absent id reports zero
/// changes.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let changes = state.store.delete_item(id).await?;
    Ok(Json(json!({ "message": "Deleted", "changes": changes })))
}
