use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::json;

use crate::auth::bearer_token;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/login - Exchange admin credentials for the admin token
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> impl IntoResponse {
    match state.guard.login(&body.username, &body.password) {
        Some(token) => Json(json!({ "success": true, "token": token })).into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "error": "Invalid credentials" })),
        )
            .into_response(),
    }
}

/// GET /api/verify - Check whether the presented bearer token is the admin token
pub async fn verify(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let valid = bearer_token(&headers)
        .map(|token| state.guard.verify(token))
        .unwrap_or(false);

    if valid {
        Json(json!({ "valid": true })).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "valid": false }))).into_response()
    }
}
