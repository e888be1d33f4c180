use axum::{
    body::Bytes,
    extract::State,
    http::{header::ALLOW, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::models::{NotificationRequest, StatusResponse};
use crate::services::DeliveryError;
use crate::startup::AppState;
use service_core::error::AppError;

/// Relay a notification to Telegram.
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that every malformed payload is a plain 400, whatever its content type.
#[tracing::instrument(skip(state, body))]
pub async fn send_notification(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<StatusResponse>), AppError> {
    let request: NotificationRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected malformed notification body");
        AppError::BadRequest("invalid JSON request".to_string())
    })?;

    request.validate()?;

    state
        .notifier
        .deliver(&request.chat_id, &request.message)
        .await
        .map_err(|e| {
            tracing::error!(
                chat_id = %request.chat_id,
                error = %e,
                "Failed to send notification to Telegram"
            );

            match e {
                DeliveryError::MissingCredential => AppError::ConfigError(anyhow::Error::new(e)),
                other => AppError::InternalError(anyhow::Error::new(other)),
            }
        })?;

    Ok((StatusCode::OK, Json(StatusResponse::notification_sent())))
}

/// Fallback for every method other than POST. The body is never read.
pub async fn method_not_allowed() -> impl IntoResponse {
    ([(ALLOW, "POST")], AppError::MethodNotAllowed)
}
