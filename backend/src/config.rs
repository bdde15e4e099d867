//! Relay configuration.
//!
//! The webhook URL is injected at startup from the environment (a `.env`
//! file is loaded when present) or from the command line; it is never
//! embedded in the relay logic.

use reqwest::Url;
use std::env;
use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};

/// Environment variable holding the webhook URL.
pub const WEBHOOK_URL_ENV: &str = "NOVACARD_WEBHOOK_URL";

/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "NOVACARD_PORT";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Largest accepted request body: both images at their limits plus the
/// text fields and multipart framing.
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Startup configuration of the relay.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Where submissions are forwarded
    pub webhook_url: Url,
    /// HTTP listen port
    pub port: u16,
    /// Compiled frontend to serve, if any
    pub static_dir: Option<PathBuf>,
}

impl RelayConfig {
    /// Config for a webhook URL with default port and no static files.
    pub fn new(webhook_url: &str) -> ConfigResult<Self> {
        Ok(Self {
            webhook_url: parse_webhook_url(webhook_url)?,
            port: DEFAULT_PORT,
            static_dir: None,
        })
    }

    /// Read the configuration from the process environment.
    ///
    /// Explicit values (usually from CLI flags) win over the environment.
    /// `.env` is loaded once at startup by the binary, not here.
    pub fn from_env(webhook_url: Option<String>, port: Option<u16>) -> ConfigResult<Self> {
        Self::from_lookup(webhook_url, port, |key| env::var(key).ok())
    }

    /// Same as [`RelayConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup(
        webhook_url: Option<String>,
        port: Option<u16>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        let url = webhook_url
            .or_else(|| lookup(WEBHOOK_URL_ENV))
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingWebhookUrl)?;

        let port = match port {
            Some(p) => p,
            None => match lookup(PORT_ENV) {
                Some(raw) => parse_port(&raw)?,
                None => DEFAULT_PORT,
            },
        };

        Ok(Self {
            webhook_url: parse_webhook_url(url.trim())?,
            port,
            static_dir: None,
        })
    }

    /// Serve the compiled frontend from this directory.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}

fn parse_webhook_url(raw: &str) -> ConfigResult<Url> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidWebhookUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

fn parse_port(raw: &str) -> ConfigResult<u16> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_reads_environment() {
        let env = vars(&[
            (WEBHOOK_URL_ENV, "https://hooks.example.com/webhook/abc"),
            (PORT_ENV, "8080"),
        ]);
        let config = RelayConfig::from_lookup(None, None, |k| env.get(k).cloned()).unwrap();
        assert_eq!(config.webhook_url.as_str(), "https://hooks.example.com/webhook/abc");
        assert_eq!(config.port, 8080);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_explicit_values_win() {
        let env = vars(&[(WEBHOOK_URL_ENV, "https://env.example.com/"), (PORT_ENV, "8080")]);
        let config = RelayConfig::from_lookup(
            Some("https://flag.example.com/hook".into()),
            Some(9000),
            |k| env.get(k).cloned(),
        )
        .unwrap();
        assert_eq!(config.webhook_url.host_str(), Some("flag.example.com"));
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_from_env_uses_explicit_values() {
        let config = RelayConfig::from_env(Some("https://flag.example.com/hook".into()), Some(9100)).unwrap();
        assert_eq!(config.webhook_url.host_str(), Some("flag.example.com"));
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn test_missing_url() {
        let err = RelayConfig::from_lookup(None, None, |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingWebhookUrl));

        let env = vars(&[(WEBHOOK_URL_ENV, "   ")]);
        let err = RelayConfig::from_lookup(None, None, |k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingWebhookUrl));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            RelayConfig::new("not a url").unwrap_err(),
            ConfigError::InvalidWebhookUrl { .. }
        ));
        assert!(matches!(
            RelayConfig::new("ftp://example.com/hook").unwrap_err(),
            ConfigError::UnsupportedScheme(s) if s == "ftp"
        ));

        let env = vars(&[(WEBHOOK_URL_ENV, "https://example.com/"), (PORT_ENV, "http")]);
        let err = RelayConfig::from_lookup(None, None, |k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn test_default_port() {
        let config = RelayConfig::new("http://localhost:5678/webhook").unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        let config = config.with_static_dir("dist");
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
    }
}
