//! Upstream lookup clients for the status and WHOIS APIs.

pub mod client;
pub mod mock;
pub mod types;

pub use client::HttpLookupClient;
pub use types::{McStatus, Motd, Players, QueryKind, WhoisRecord};

use async_trait::async_trait;

use crate::error::LookupError;

/// Query seam over the upstream status and WHOIS APIs.
///
/// Handlers depend on this trait so tests can substitute a mock client
/// and assert on call counts without touching the network.
#[async_trait]
pub trait StatusLookup: Send + Sync {
    /// Fetch the live status of a Minecraft server.
    ///
    /// Returns [`LookupError::TargetOffline`] when the server did not
    /// answer the status ping.
    async fn mc_status(&self, address: &str) -> Result<McStatus, LookupError>;

    /// Fetch the WHOIS record for a domain or IP.
    async fn whois(&self, target: &str) -> Result<WhoisRecord, LookupError>;
}
