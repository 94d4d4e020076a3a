//! Mock notification sink for unit testing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::DispatchError;

use super::embed::WebhookPayload;
use super::NotifySink;

/// Mock sink that records every dispatched payload.
///
/// Clones share the recorded payloads, so a test can keep one clone for
/// assertions after handing the other to a router.
#[derive(Debug, Clone, Default)]
pub struct MockNotifySink {
    /// Whether dispatch calls fail.
    fail: bool,
    /// Payloads received so far.
    dispatched: Arc<Mutex<Vec<WebhookPayload>>>,
}

impl MockNotifySink {
    /// Create a sink that accepts every payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that rejects every payload with a delivery failure.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of payloads dispatched across all clones.
    pub fn dispatch_count(&self) -> usize {
        self.dispatched.lock().unwrap().len()
    }

    /// The most recently dispatched payload, if any.
    pub fn last_payload(&self) -> Option<WebhookPayload> {
        self.dispatched.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl NotifySink for MockNotifySink {
    async fn dispatch(&self, payload: &WebhookPayload) -> Result<(), DispatchError> {
        if self.fail {
            return Err(DispatchError::DeliveryFailed { status: 500 });
        }

        self.dispatched.lock().unwrap().push(payload.clone());
        Ok(())
    }
}
