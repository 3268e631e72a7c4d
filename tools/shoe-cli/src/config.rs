//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use shoe_card::{CardOptions, DEFAULT_DETAIL_PREFIX};
use shoe_catalog::{Currency, RecencyPolicy, DEFAULT_NEW_RELEASE_DAYS};
use shoe_observability::{LogFormat, LogLevel};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shoecard.toml", ".shoecard.toml", "shoecard.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Card rendering configuration.
    #[serde(default)]
    pub card: CardConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file, TOML unless the extension is `.json`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Effective config as TOML, with `[card]` and `[logging]` tables.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Card options derived from this config.
    pub fn card_options(&self) -> CardOptions {
        CardOptions {
            detail_prefix: self.card.detail_prefix.clone(),
            recency: RecencyPolicy::with_days(self.card.new_release_days),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Card rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Currency prices are expressed in.
    #[serde(default)]
    pub currency: Currency,

    /// Prefix of detail page links.
    #[serde(default = "default_detail_prefix")]
    pub detail_prefix: String,

    /// Days a release stays "new".
    #[serde(default = "default_new_release_days")]
    pub new_release_days: u32,
}

fn default_detail_prefix() -> String {
    DEFAULT_DETAIL_PREFIX.to_string()
}

fn default_new_release_days() -> u32 {
    DEFAULT_NEW_RELEASE_DAYS
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            detail_prefix: default_detail_prefix(),
            new_release_days: default_new_release_days(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

/// Default config file contents, written by `config init`.
pub fn generate_default_config() -> String {
    format!(
        r#"# shoecard configuration

[card]
# Currency of listing prices (minor units on the wire).
currency = "USD"
# Detail links are rendered as {{detail_prefix}}/{{slug}}.
detail_prefix = "{}"
# A shoe released within this many days gets the "Just released!" badge.
new_release_days = {}

[logging]
# trace | debug | info | warn | error
level = "info"
# human | json
format = "human"
"#,
        DEFAULT_DETAIL_PREFIX, DEFAULT_NEW_RELEASE_DAYS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: CliConfig = toml::from_str("[card]\ncurrency = \"EUR\"\n").unwrap();
        assert_eq!(config.card.currency, Currency::EUR);
        assert_eq!(config.card.detail_prefix, "/shoe");
        assert_eq!(config.card.new_release_days, 30);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_load_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("shoecard.toml");
        std::fs::write(&toml_path, "[card]\nnew_release_days = 7\n").unwrap();
        assert_eq!(CliConfig::load(&toml_path).unwrap().card.new_release_days, 7);

        let json_path = dir.path().join("shoecard.json");
        std::fs::write(
            &json_path,
            r#"{"logging": {"level": "debug", "format": "json"}}"#,
        )
        .unwrap();
        let config = CliConfig::load(&json_path).unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_to_toml_keeps_sections() {
        let mut config = CliConfig::default();
        config.card.detail_prefix = "/sneakers".to_string();
        let text = config.to_toml().unwrap();

        let card = text.find("[card]").unwrap();
        let logging = text.find("[logging]").unwrap();
        assert!(card < text.find("detail_prefix = \"/sneakers\"").unwrap());
        assert!(logging < text.find("level = \"info\"").unwrap());
        assert!(text.contains("currency = \"USD\""));

        assert_eq!(toml::from_str::<CliConfig>(&text).unwrap(), config);
    }

    #[test]
    fn test_currency_code_any_case() {
        let config: CliConfig = toml::from_str("[card]\ncurrency = \"usd\"\n").unwrap();
        assert_eq!(config.card.currency, Currency::USD);
        assert!(toml::from_str::<CliConfig>("[card]\ncurrency = \"zzz\"\n").is_err());
    }

    #[test]
    fn test_card_options() {
        let mut config = CliConfig::default();
        config.card.new_release_days = 14;
        let options = config.card_options();
        assert_eq!(options.recency, RecencyPolicy::with_days(14));
        assert_eq!(options.detail_prefix, "/shoe");
    }
}
