//! Typed payloads returned by the upstream lookup APIs.

use serde::Deserialize;
use strum::{Display, EnumString};

/// Which upstream API a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum QueryKind {
    /// Minecraft server status via mcsrvstat.us.
    #[strum(to_string = "minecraft", serialize = "mc")]
    Minecraft,
    /// Domain/IP WHOIS via the Who-Data API.
    #[strum(to_string = "whois", serialize = "domain")]
    Whois,
}

/// Minecraft server status as reported by mcsrvstat.us.
///
/// Every field other than `online` is optional. Absent data is resolved
/// to placeholders by the embed formatter, never here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct McStatus {
    /// Whether the server answered the status ping.
    #[serde(default)]
    pub online: bool,
    /// Resolved IP address.
    pub ip: Option<String>,
    /// Resolved port.
    pub port: Option<u16>,
    /// Hostname echoed back by the API.
    pub hostname: Option<String>,
    /// Server version string.
    pub version: Option<String>,
    /// Player counts and sample name list.
    pub players: Option<Players>,
    /// Message of the day.
    pub motd: Option<Motd>,
}

/// Player information inside a status response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Players {
    /// Players currently online.
    pub online: Option<u32>,
    /// Server capacity.
    pub max: Option<u32>,
    /// Sample of online player names.
    pub list: Option<Vec<String>>,
}

/// Message of the day lines.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Motd {
    /// Raw lines including formatting codes.
    pub raw: Option<Vec<String>>,
    /// Lines with formatting codes stripped.
    pub clean: Option<Vec<String>>,
}

/// WHOIS record as reported by the Who-Data API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WhoisRecord {
    /// Registered domain name.
    pub domain: Option<String>,
    /// Registrant name or organization.
    pub registrant: Option<String>,
    /// Registration date.
    pub registered: Option<String>,
    /// Expiry date.
    pub expires: Option<String>,
    /// Authoritative nameservers.
    pub nameservers: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_kind_from_string_works() {
        use std::str::FromStr;
        assert_eq!(QueryKind::from_str("minecraft").unwrap(), QueryKind::Minecraft);
        assert_eq!(QueryKind::from_str("mc").unwrap(), QueryKind::Minecraft);
        assert_eq!(QueryKind::from_str("whois").unwrap(), QueryKind::Whois);
        assert_eq!(QueryKind::from_str("domain").unwrap(), QueryKind::Whois);
    }

    #[test]
    fn query_kind_display_is_lowercase() {
        assert_eq!(QueryKind::Minecraft.to_string(), "minecraft");
        assert_eq!(QueryKind::Whois.to_string(), "whois");
    }

    #[test]
    fn mc_status_parses_full_payload() {
        let json = r#"{
            "online": true,
            "ip": "172.65.234.205",
            "port": 25565,
            "hostname": "play.hypixel.net",
            "version": "1.20.1",
            "players": {"online": 5, "max": 20, "list": ["Alice", "Bob"]},
            "motd": {"raw": ["§aWelcome"], "clean": ["Welcome"]}
        }"#;

        let status: McStatus = serde_json::from_str(json).unwrap();
        assert!(status.online);
        assert_eq!(status.version.as_deref(), Some("1.20.1"));

        let players = status.players.unwrap();
        assert_eq!(players.online, Some(5));
        assert_eq!(players.max, Some(20));
        assert_eq!(players.list.unwrap().len(), 2);

        let motd = status.motd.unwrap();
        assert_eq!(motd.clean.unwrap(), vec!["Welcome"]);
    }

    #[test]
    fn mc_status_parses_offline_payload() {
        let status: McStatus = serde_json::from_str(r#"{"online": false}"#).unwrap();
        assert!(!status.online);
        assert!(status.players.is_none());
    }

    #[test]
    fn mc_status_defaults_missing_online_to_false() {
        let status: McStatus = serde_json::from_str("{}").unwrap();
        assert!(!status.online);
    }

    #[test]
    fn whois_record_parses_partial_payload() {
        let json = r#"{"domain": "example.com", "nameservers": []}"#;
        let record: WhoisRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.domain.as_deref(), Some("example.com"));
        assert!(record.registrant.is_none());
        assert_eq!(record.nameservers.unwrap().len(), 0);
    }
}
