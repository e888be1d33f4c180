use serde::{Deserialize, Serialize};
use validator::Validate;

pub const STATUS_OK: &str = "ok";
pub const STATUS_NOTIFICATION_SENT: &str = "notification sent";

/// Inbound body of `POST /notification`.
///
/// Absent fields decode as empty strings so they fail validation the same
/// way explicit empty strings do.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NotificationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Fields 'chat_id' and 'message' are required"))]
    pub chat_id: String,
    #[serde(default, alias = "mensagem")]
    #[validate(length(min = 1, message = "Fields 'chat_id' and 'message' are required"))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK.to_string(),
        }
    }

    pub fn notification_sent() -> Self {
        Self {
            status: STATUS_NOTIFICATION_SENT.to_string(),
        }
    }
}
