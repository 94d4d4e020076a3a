//! Discord embed construction.
//!
//! Formatting is pure: every optional upstream field is resolved to a
//! placeholder here, in one place, so a dispatched payload never carries
//! a literal `null` or an empty field value.

use serde::Serialize;

use crate::lookup::{McStatus, WhoisRecord};

/// Embed color for an online Minecraft server.
const COLOR_ONLINE: u32 = 0x2ecc71;
/// Embed color for WHOIS results.
const COLOR_WHOIS: u32 = 0x3498db;

/// Placeholder for absent lists and MOTD text.
const PLACEHOLDER_NONE: &str = "없음";
/// Placeholder for an unknown server version.
const PLACEHOLDER_UNKNOWN: &str = "알 수 없음";
/// Placeholder for absent WHOIS fields.
const PLACEHOLDER_NA: &str = "N/A";

/// Icon service base URL for server thumbnails.
const MC_ICON_URL: &str = "https://api.mcsrvstat.us/icon";

/// Top-level webhook payload.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    /// Optional plain-text content alongside the embeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Rich embeds; exactly one per notification.
    pub embeds: Vec<Embed>,
}

/// A single Discord embed.
#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    /// Embed title.
    pub title: String,
    /// Accent color.
    pub color: u32,
    /// Name/value pairs in fixed order.
    pub fields: Vec<EmbedField>,
    /// Optional thumbnail image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,
    /// Optional footer line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

/// Name/value pair rendered inside an embed.
#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    /// Field label.
    pub name: String,
    /// Field value; never empty.
    pub value: String,
    /// Whether the field renders inline.
    pub inline: bool,
}

/// Thumbnail image reference.
#[derive(Debug, Clone, Serialize)]
pub struct EmbedThumbnail {
    /// Image URL.
    pub url: String,
}

/// Footer line.
#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    /// Footer text.
    pub text: String,
}

impl EmbedField {
    fn inline(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline: true,
        }
    }

    fn block(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline: false,
        }
    }
}

/// Resolve an optional text field, treating an empty string like absence.
fn text_or<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => placeholder,
    }
}

/// Join lines, treating an absent or empty list like absence.
fn join_or(lines: Option<&[String]>, sep: &str, placeholder: &str) -> String {
    match lines {
        Some(lines) if !lines.is_empty() => lines.join(sep),
        _ => placeholder.to_string(),
    }
}

/// Build the notification payload for a Minecraft status lookup.
pub fn mc_status_embed(address: &str, status: &McStatus) -> WebhookPayload {
    let players = status.players.as_ref();
    let player_count = format!(
        "{} / {}",
        players.and_then(|p| p.online).unwrap_or(0),
        players.and_then(|p| p.max).unwrap_or(0),
    );

    let version = text_or(status.version.as_deref(), PLACEHOLDER_UNKNOWN).to_string();
    let motd = join_or(
        status.motd.as_ref().and_then(|m| m.clean.as_deref()),
        "\n",
        PLACEHOLDER_NONE,
    );
    let player_list = join_or(players.and_then(|p| p.list.as_deref()), ", ", PLACEHOLDER_NONE);

    WebhookPayload {
        content: None,
        embeds: vec![Embed {
            title: "🟢 Minecraft 서버 상태".to_string(),
            color: COLOR_ONLINE,
            fields: vec![
                EmbedField::inline("서버 주소", address),
                EmbedField::inline("온라인 여부", "✅ 온라인"),
                EmbedField::inline("플레이어 수", player_count),
                EmbedField::inline("버전", version),
                EmbedField::block("MOTD", motd),
                EmbedField::block("접속 중인 플레이어", player_list),
            ],
            thumbnail: Some(EmbedThumbnail {
                url: format!("{}/{}", MC_ICON_URL, address),
            }),
            footer: Some(EmbedFooter {
                text: "⚡ Data by mcsrvstat.us".to_string(),
            }),
        }],
    }
}

/// Build the notification payload for a WHOIS lookup.
pub fn whois_embed(target: &str, record: &WhoisRecord) -> WebhookPayload {
    WebhookPayload {
        content: None,
        embeds: vec![Embed {
            title: format!("🔍 WHOIS 조회: {}", target),
            color: COLOR_WHOIS,
            fields: vec![
                EmbedField::inline("도메인", text_or(record.domain.as_deref(), target)),
                EmbedField::inline("등록자", text_or(record.registrant.as_deref(), PLACEHOLDER_NA)),
                EmbedField::inline("등록일", text_or(record.registered.as_deref(), PLACEHOLDER_NA)),
                EmbedField::inline("만료일", text_or(record.expires.as_deref(), PLACEHOLDER_NA)),
                EmbedField::block(
                    "네임서버",
                    join_or(record.nameservers.as_deref(), "\n", PLACEHOLDER_NA),
                ),
            ],
            thumbnail: None,
            footer: Some(EmbedFooter {
                text: "⚡ Data by Who-Data API".to_string(),
            }),
        }],
    }
}
