pub mod providers;

pub use providers::{DeliveryError, MockNotifier, Notifier, SendMessageRequest, TelegramNotifier};
