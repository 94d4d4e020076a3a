//! Mock lookup client for unit testing.
//!
//! This module provides a mock client that can be used in tests
//! without making real network requests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::LookupError;

use super::types::{McStatus, WhoisRecord};
use super::StatusLookup;

/// Configuration for mock lookup behavior.
#[derive(Debug, Clone, Default)]
pub struct MockLookupConfig {
    /// Whether the Minecraft status call reports the target offline.
    pub offline: bool,
    /// Whether lookups fail with an unparseable-response error.
    pub fail_parse: bool,
    /// Whether lookups fail with an upstream fetch error.
    pub fail_fetch: bool,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

/// Mock lookup client for testing.
///
/// Clones share the underlying responses and the call counter, so a test
/// can keep one clone for assertions after handing the other to a router.
#[derive(Debug, Clone, Default)]
pub struct MockLookupClient {
    /// Mock configuration.
    config: MockLookupConfig,
    /// Canned Minecraft status response.
    mc_response: Arc<Mutex<McStatus>>,
    /// Canned WHOIS response.
    whois_response: Arc<Mutex<WhoisRecord>>,
    /// Number of lookups performed.
    calls: Arc<AtomicUsize>,
}

impl MockLookupClient {
    /// Create a new mock client with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock client with custom configuration.
    pub fn with_config(config: MockLookupConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set the canned Minecraft status response.
    pub fn set_mc_status(&self, status: McStatus) {
        *self.mc_response.lock().unwrap() = status;
    }

    /// Set the canned WHOIS response.
    pub fn set_whois(&self, record: WhoisRecord) {
        *self.whois_response.lock().unwrap() = record;
    }

    /// Number of lookups performed across all clones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn simulate(&self) -> Result<(), LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.config.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        if self.config.fail_parse {
            return Err(LookupError::InvalidResponse(
                "mock parse failure".to_string(),
            ));
        }

        if self.config.fail_fetch {
            return Err(LookupError::FetchFailed {
                target: "mock".to_string(),
                reason: "mock fetch failure".to_string(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl StatusLookup for MockLookupClient {
    async fn mc_status(&self, _address: &str) -> Result<McStatus, LookupError> {
        self.simulate().await?;

        if self.config.offline {
            return Err(LookupError::TargetOffline);
        }

        Ok(self.mc_response.lock().unwrap().clone())
    }

    async fn whois(&self, _target: &str) -> Result<WhoisRecord, LookupError> {
        self.simulate().await?;
        Ok(self.whois_response.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::types::Players;

    #[tokio::test]
    async fn mock_client_returns_canned_status() {
        let client = MockLookupClient::new();
        client.set_mc_status(McStatus {
            online: true,
            players: Some(Players {
                online: Some(3),
                max: Some(10),
                list: None,
            }),
            ..Default::default()
        });

        let status = client.mc_status("play.example.net").await.unwrap();
        assert!(status.online);
        assert_eq!(status.players.unwrap().online, Some(3));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn mock_client_offline_mode() {
        let client = MockLookupClient::with_config(MockLookupConfig {
            offline: true,
            ..Default::default()
        });

        let result = client.mc_status("play.example.net").await;
        assert!(matches!(result, Err(LookupError::TargetOffline)));
    }

    #[tokio::test]
    async fn mock_client_failure_modes() {
        let client = MockLookupClient::with_config(MockLookupConfig {
            fail_parse: true,
            ..Default::default()
        });

        let result = client.whois("example.com").await;
        assert!(matches!(result, Err(LookupError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn mock_client_counts_calls_across_clones() {
        let client = MockLookupClient::new();
        let clone = client.clone();

        clone.set_whois(WhoisRecord::default());
        let _ = clone.whois("example.com").await;

        assert_eq!(client.call_count(), 1);
    }
}
