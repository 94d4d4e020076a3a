//! HTTP client for the upstream status and WHOIS APIs.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::LookupError;

use super::types::{McStatus, WhoisRecord};
use super::StatusLookup;

/// Client for the mcsrvstat.us and Who-Data APIs.
///
/// Performs exactly one GET per lookup. Identifiers are forwarded as-is;
/// a malformed identifier surfaces as an upstream error, never as a
/// client-side validation step.
#[derive(Debug, Clone)]
pub struct HttpLookupClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL for the Minecraft status API.
    mcstatus_url: String,
    /// Base URL for the WHOIS API.
    whois_url: String,
}

impl HttpLookupClient {
    /// Create a new lookup client from config with a bounded timeout.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(std::time::Duration::from_millis(2_000))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            mcstatus_url: config.mcstatus_api_url.trim_end_matches('/').to_string(),
            whois_url: config.whois_api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the HTTP client reference.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Get the Minecraft status API base URL.
    pub fn mcstatus_url(&self) -> &str {
        &self.mcstatus_url
    }

    /// Get the WHOIS API base URL.
    pub fn whois_url(&self) -> &str {
        &self.whois_url
    }

    /// GET `<base>/<target>` and parse the body as JSON.
    ///
    /// The body is read as text first so a malformed payload surfaces as
    /// [`LookupError::InvalidResponse`] instead of a transport error.
    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        base: &str,
        target: &str,
    ) -> Result<T, LookupError> {
        let url = format!("{}/{}", base, target);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(LookupError::FetchFailed {
                target: target.to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| LookupError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl StatusLookup for HttpLookupClient {
    #[instrument(skip(self))]
    async fn mc_status(&self, address: &str) -> Result<McStatus, LookupError> {
        let status: McStatus = self.fetch_json(&self.mcstatus_url, address).await?;

        // An absent flag deserializes to false and is treated the same.
        if !status.online {
            return Err(LookupError::TargetOffline);
        }

        debug!(address, version = ?status.version, "minecraft server online");
        Ok(status)
    }

    #[instrument(skip(self))]
    async fn whois(&self, target: &str) -> Result<WhoisRecord, LookupError> {
        let record: WhoisRecord = self.fetch_json(&self.whois_url, target).await?;

        debug!(target, domain = ?record.domain, "whois record fetched");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            discord_webhook_url: "https://discord.com/api/webhooks/1/abc".to_string(),
            port: 3000,
            mcstatus_api_url: "https://api.mcsrvstat.us/2/".to_string(),
            whois_api_url: "https://who-dat.as93.net".to_string(),
            http_timeout_ms: 8_000,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn client_creation_works() {
        let client = HttpLookupClient::new(&test_config());
        assert_eq!(client.whois_url(), "https://who-dat.as93.net");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = HttpLookupClient::new(&test_config());
        assert_eq!(client.mcstatus_url(), "https://api.mcsrvstat.us/2");
    }
}
