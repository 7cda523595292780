//! Client configuration with TOML file support.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use blockvote_types::Address;

/// Configuration for the BlockVote terminal client.
///
/// Can be loaded from a TOML file via [`ClientConfig::from_toml_file`] or
/// built programmatically; CLI flags and env vars override file values.
/// The admin address is deliberately configuration, not a compiled-in
/// constant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Wallet agent JSON-RPC endpoint. Absent means no agent is
    /// configured; connecting will fail with a clear notice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_url: Option<String>,

    /// Deployed election contract address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<Address>,

    /// The election admin account; gates which controls are rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_address: Option<Address>,

    /// How often to poll the agent for account/chain changes, in seconds.
    #[serde(default = "default_account_poll_secs")]
    pub account_poll_secs: u64,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_account_poll_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("failed to parse config file")
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("ClientConfig is always serializable to TOML")
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            agent_url: None,
            contract_address: None,
            admin_address: None,
            account_poll_secs: default_account_poll_secs(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ClientConfig::default();
        let toml_str = config.to_toml_string();
        let parsed = ClientConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.account_poll_secs, config.account_poll_secs);
        assert_eq!(parsed.log_level, config.log_level);
        assert!(parsed.agent_url.is_none());
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = ClientConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.account_poll_secs, 5);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            agent_url = "http://127.0.0.1:8645"
            account_poll_secs = 2
        "#;
        let config = ClientConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.agent_url.as_deref(), Some("http://127.0.0.1:8645"));
        assert_eq!(config.account_poll_secs, 2);
        assert_eq!(config.log_level, "info"); // default
    }

    #[test]
    fn addresses_are_validated_on_parse() {
        let result = ClientConfig::from_toml_str("admin_address = \"nope\"");
        assert!(result.is_err());

        let config = ClientConfig::from_toml_str(
            "admin_address = \"0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266\"",
        )
        .unwrap();
        assert_eq!(
            config.admin_address.unwrap().as_str(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();

        let config = ClientConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(ClientConfig::from_toml_file(Path::new("/nonexistent/blockvote.toml")).is_err());
    }
}
