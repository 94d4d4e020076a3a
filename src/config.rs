//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Constructed once at process entry and passed by reference into the
/// request handlers; handler logic never reads the environment directly.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Discord webhook URL that receives every notification.
    pub discord_webhook_url: String,

    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the Minecraft status API.
    #[serde(default = "default_mcstatus_api_url")]
    pub mcstatus_api_url: String,

    /// Base URL of the WHOIS lookup API.
    #[serde(default = "default_whois_api_url")]
    pub whois_api_url: String,

    /// Upstream request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_port() -> u16 {
    3000
}

fn default_mcstatus_api_url() -> String {
    "https://api.mcsrvstat.us/2".to_string()
}

fn default_whois_api_url() -> String {
    "https://who-dat.as93.net".to_string()
}

fn default_http_timeout_ms() -> u64 {
    8_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.discord_webhook_url.is_empty() {
            return Err("DISCORD_WEBHOOK_URL is required".to_string());
        }

        if !self.discord_webhook_url.starts_with("http://")
            && !self.discord_webhook_url.starts_with("https://")
        {
            return Err("DISCORD_WEBHOOK_URL must be an http(s) URL".to_string());
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            discord_webhook_url: "https://discord.com/api/webhooks/1/abc".to_string(),
            port: default_port(),
            mcstatus_api_url: default_mcstatus_api_url(),
            whois_api_url: default_whois_api_url(),
            http_timeout_ms: default_http_timeout_ms(),
            rust_log: default_log_level(),
        }
    }

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_port(), 3000);
        assert_eq!(default_mcstatus_api_url(), "https://api.mcsrvstat.us/2");
        assert_eq!(default_whois_api_url(), "https://who-dat.as93.net");
        assert_eq!(default_http_timeout_ms(), 8_000);
    }

    #[test]
    fn validate_accepts_https_webhook() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_webhook_url() {
        let config = Config {
            discord_webhook_url: "".to_string(),
            ..test_config()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_webhook_url() {
        let config = Config {
            discord_webhook_url: "ftp://example.com/hook".to_string(),
            ..test_config()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = Config {
            http_timeout_ms: 0,
            ..test_config()
        };

        assert!(config.validate().is_err());
    }
}
