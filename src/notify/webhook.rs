//! Discord webhook delivery.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::DispatchError;

use super::embed::WebhookPayload;
use super::NotifySink;

/// Webhook client posting payloads to a fixed Discord webhook URL.
#[derive(Debug, Clone)]
pub struct DiscordWebhook {
    /// HTTP client for webhook requests.
    http: reqwest::Client,
    /// Webhook URL.
    url: String,
}

impl DiscordWebhook {
    /// Create a new webhook client from config with a bounded timeout.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            url: config.discord_webhook_url.clone(),
        }
    }

    /// Get the webhook URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl NotifySink for DiscordWebhook {
    /// POST the payload once.
    ///
    /// Only the status code decides success; the response body is never
    /// inspected. Discord answers 204, any 2xx is accepted. There is no
    /// retry, so a delivered-then-retried request would notify twice.
    #[instrument(skip(self, payload))]
    async fn dispatch(&self, payload: &WebhookPayload) -> Result<(), DispatchError> {
        let response = self.http.post(&self.url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::DeliveryFailed {
                status: status.as_u16(),
            });
        }

        debug!(status = %status, "notification delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_creation_keeps_url() {
        let config = Config {
            discord_webhook_url: "https://discord.com/api/webhooks/1/abc".to_string(),
            port: 3000,
            mcstatus_api_url: "https://api.mcsrvstat.us/2".to_string(),
            whois_api_url: "https://who-dat.as93.net".to_string(),
            http_timeout_ms: 8_000,
            rust_log: "info".to_string(),
        };

        let webhook = DiscordWebhook::new(&config);
        assert_eq!(webhook.url(), "https://discord.com/api/webhooks/1/abc");
    }
}
