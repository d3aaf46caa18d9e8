use axum::{
    extract::State,
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use state::AppState;

/// Build the full application router: a fixed dispatch table in front of the
/// catalog store, with the admin gate layered over every mutating route.
pub fn app(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/api/categories", post(handlers::categories::create))
        .route("/api/categories/:id", delete(handlers::categories::delete))
        .route("/api/items", post(handlers::items::create))
        .route("/api/items/:id", delete(handlers::items::delete))
        .route_layer(from_fn_with_state(state.clone(), middleware::require_admin));

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/login", post(handlers::auth::login))
        .route("/api/verify", get(handlers::auth::verify))
        .route("/api/categories", get(handlers::categories::list))
        // Path segment is the category id here; named :id to line up with
        // the DELETE route on the same pattern.
        .route("/api/items/:id", get(handlers::items::list_by_category))
        // Admin-gated writes
        .merge(admin_routes)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Menu API",
        "version": version,
        "description": "Menu management backend for a small retail catalog",
        "endpoints": {
            "login": "POST /api/login (public)",
            "verify": "GET /api/verify (bearer token)",
            "categories": "GET /api/categories (public), POST /api/categories, DELETE /api/categories/:id (admin)",
            "items": "GET /api/items/:categoryId (public), POST /api/items, DELETE /api/items/:id (admin)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
