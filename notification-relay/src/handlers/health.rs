use axum::Json;

use crate::models::StatusResponse;

/// Liveness probe. Stateless: no dependency is checked.
pub async fn health_check() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}
