use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::database::models::{Category, NewCategory};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/categories - All categories, ordered for display (public)
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.store.list_categories().await?;
    Ok(Json(categories))
}

/// POST /api/categories - Create a category; sort order is allocated by the
/// store (admin)
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewCategory>,
) -> Result<Json<Value>, ApiError> {
    let id = state.store.create_category(&body).await?;
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/categories/:id - Remove a category and, by cascade, all of
/// its items (admin). Deleting an absent id reports zero changes.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let changes = state.store.delete_category(id).await?;
    Ok(Json(json!({ "message": "Deleted", "changes": changes })))
}
