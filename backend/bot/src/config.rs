use anyhow::{bail, Result};
use std::collections::HashMap;

/// Bot service configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// HTTP bind address
    pub bind_address: String,
    /// HTTP port
    pub port: u16,
    /// Hex-encoded Ed25519 public key pinned for interaction verification
    pub public_key_hex: String,
    /// Shared secret sent to the webhook server as X-Auth-Token
    pub webhook_token: String,
    /// Base URL of the internal webhook server
    pub webhook_base_url: String,
    /// Timeout for relay calls, in seconds
    pub relay_timeout_secs: u64,
}

impl BotConfig {
    /// Load configuration from process environment variables.
    ///
    /// A missing required variable fails startup rather than degrading.
    pub fn from_env() -> Result<Self> {
        Self::from_env_map(&std::env::vars().collect())
    }

    /// Load configuration from a provided map (useful for testing).
    pub fn from_env_map(env: &HashMap<String, String>) -> Result<Self> {
        Ok(Self {
            bind_address: env
                .get("BIND")
                .cloned()
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port: env.get("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            public_key_hex: require(env, "BOT_PUBLIC_KEY")?,
            webhook_token: require(env, "WEBHOOK_SECRET_TOKEN")?,
            webhook_base_url: require(env, "WEBHOOK_BASE_URL")?,
            relay_timeout_secs: env
                .get("RELAY_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
        })
    }
}

fn require(env: &HashMap<String, String>, name: &str) -> Result<String> {
    match env.get(name) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => bail!("{} environment variable not set", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn loads_with_required_vars() {
        let config = BotConfig::from_env_map(&env(&[
            ("BOT_PUBLIC_KEY", "aa"),
            ("WEBHOOK_SECRET_TOKEN", "secret"),
            ("WEBHOOK_BASE_URL", "https://movienight.example:4443"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.webhook_base_url, "https://movienight.example:4443");
    }

    #[test]
    fn missing_required_var_fails() {
        let result = BotConfig::from_env_map(&env(&[("BOT_PUBLIC_KEY", "aa")]));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("WEBHOOK_SECRET_TOKEN"));
    }

    #[test]
    fn empty_required_var_fails() {
        let result = BotConfig::from_env_map(&env(&[
            ("BOT_PUBLIC_KEY", ""),
            ("WEBHOOK_SECRET_TOKEN", "secret"),
            ("WEBHOOK_BASE_URL", "http://localhost"),
        ]));
        assert!(result.is_err());
    }
}
