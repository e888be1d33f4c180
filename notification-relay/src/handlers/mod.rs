//! HTTP handlers for notification-relay.

pub mod health;
pub mod notification;

pub use health::health_check;
pub use notification::{method_not_allowed, send_notification};
