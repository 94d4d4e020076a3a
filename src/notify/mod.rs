//! Discord notification formatting and webhook delivery.

pub mod embed;
pub mod mock;
pub mod webhook;

pub use embed::{mc_status_embed, whois_embed, Embed, EmbedField, WebhookPayload};
pub use webhook::DiscordWebhook;

use async_trait::async_trait;

use crate::error::DispatchError;

/// Delivery seam for outbound notifications.
#[async_trait]
pub trait NotifySink: Send + Sync {
    /// Deliver one formatted payload.
    ///
    /// Not idempotent: calling twice emits two notifications.
    async fn dispatch(&self, payload: &WebhookPayload) -> Result<(), DispatchError>;
}
