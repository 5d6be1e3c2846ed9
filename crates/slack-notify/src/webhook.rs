//! Webhook delivery
//!
//! A single POST to a Slack incoming-webhook URL. Delivery is
//! fire-and-forget: one attempt, success reported as a boolean so the
//! caller can map it to an exit status.

use std::time::Duration;

use anyhow::Context;
use log::{error, info};

use crate::block::Message;

/// Client for one Slack incoming-webhook URL
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
}

impl WebhookClient {
    /// Create a client with an explicit request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build webhook HTTP client")?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Post a message to the webhook
    ///
    /// Returns whether Slack accepted the payload. Transport errors and
    /// non-success statuses are logged, not propagated; there is no retry.
    pub async fn deliver(&self, message: &Message) -> bool {
        let response = match self.http.post(&self.url).json(message).send().await {
            Ok(response) => response,
            Err(err) => {
                error!("❌ Error posting to Slack: {}", err);
                return false;
            }
        };

        let status = response.status();
        if status.is_success() {
            info!("✅ Message posted to Slack successfully!");
            true
        } else {
            error!("❌ Slack webhook returned status {}", status);
            false
        }
    }
}
