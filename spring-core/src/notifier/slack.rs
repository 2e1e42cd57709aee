use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::{
    error::{Result, SpringError, truncate_body},
    model::NotificationMessage,
};

use super::Notifier;

/// Posts to a Slack incoming webhook using the legacy form encoding:
/// a single `payload` field holding the JSON message.
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    http: Client,
}

impl SlackNotifier {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    #[instrument(skip_all)]
    async fn notify(&self, webhook_url: &str, message: &NotificationMessage) -> Result<()> {
        let payload = message.to_payload()?;

        let res = self
            .http
            .post(webhook_url)
            .form(&[("payload", payload.as_str())])
            .send()
            .await
            .map_err(|source| SpringError::Request {
                context: "Failed to send Slack notification",
                source,
            })?;

        let status = res.status();
        debug!(%status, "Slack webhook responded");

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(SpringError::Status {
                context: "Slack webhook request",
                status,
                body: truncate_body(&body),
            });
        }

        // Already delivered; a truncated body after a 2xx is not a failure.
        if let Err(err) = res.bytes().await {
            warn!(%status, error = %err, "failed to drain Slack webhook response body");
        }

        Ok(())
    }
}
