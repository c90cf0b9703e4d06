//! Incoming-webhook delivery

use crate::error::{Error, Result};
use crate::notify::Notifier;
use crate::types::ChatPayload;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, redirect};
use tracing::debug;
use url::Url;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Posts payloads as JSON to a chat webhook
pub struct WebhookNotifier {
    client: Client,
    url: Url,
}

impl WebhookNotifier {
    /// Create a notifier for `url`
    ///
    /// Redirects are not followed, so any 3xx answer counts as a failure.
    pub fn new(url: Url) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| Error::Webhook(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, url })
    }
}

/// Map a webhook response status to success or a `Webhook` error
/// carrying the status line.
pub fn classify_status(status: StatusCode) -> Result<()> {
    if status.as_u16() < 300 {
        Ok(())
    } else {
        Err(Error::Webhook(format!("slack webhook error: {status}")))
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, payload: &ChatPayload) -> Result<()> {
        debug!(host = self.url.host_str(), "posting to webhook");

        let response = self
            .client
            .post(self.url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::Webhook(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "webhook answered");
        classify_status(status)
    }
}
