use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::Result, model::NotificationMessage};

pub mod slack;

pub use slack::SlackNotifier;

#[async_trait]
pub trait Notifier: Send + Sync + Debug {
    /// Deliver `message` to `webhook_url` in a single request.
    async fn notify(&self, webhook_url: &str, message: &NotificationMessage) -> Result<()>;
}
