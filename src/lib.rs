//! Minecraft server status and WHOIS lookups relayed to Discord.
//!
//! The service exposes a small HTTP API: a target identifier comes in, one
//! upstream lookup goes out, the result is rendered as a Discord embed and
//! posted to a fixed webhook URL.
//!
//! # Pipeline
//!
//! ```text
//! POST /mcstatus {"address": "play.hypixel.net"}
//!      └─> api.mcsrvstat.us ─> embed ─> Discord webhook
//! POST /whois {"target": "example.com"}
//!      └─> who-dat.as93.net ─> embed ─> Discord webhook
//! ```
//!
//! The two outbound calls within one request are strictly sequential: the
//! webhook is never contacted unless the lookup produced a parsed payload.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`lookup`]: Upstream status and WHOIS clients
//! - [`notify`]: Embed formatting and webhook delivery
//! - [`api`]: HTTP API surface
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod lookup;
pub mod metrics;
pub mod notify;
pub mod utils;

pub use config::Config;
pub use error::{RelayError, Result};
