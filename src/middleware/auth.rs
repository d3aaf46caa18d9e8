use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::bearer_token;
use crate::error::ApiError;
use crate::state::AppState;

/// Admin gate for mutating routes. Compares the bearer credential against
/// the configured admin token and short-circuits with 401 on mismatch; the
/// downstream handler is never invoked.
pub async fn require_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    match bearer_token(&headers) {
        Some(token) if state.guard.verify(token) => Ok(next.run(request).await),
        _ => Err(ApiError::unauthorized("Unauthorized. Admin access required.")),
    }
}
