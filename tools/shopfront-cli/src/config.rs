//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file (`shopfront.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the storefront feeds live.
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Cart persistence.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Session defaults.
    #[serde(default)]
    pub session: SessionConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Feed locations. Each may be a path, a `file://` URL or an `http(s)://` URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Product catalog feed.
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Store configuration.
    #[serde(default = "default_store_config")]
    pub config: String,

    /// Directory holding `{lang}.json` dictionaries.
    #[serde(default = "default_i18n")]
    pub i18n: String,
}

fn default_catalog() -> String {
    "products.json".to_string()
}

fn default_store_config() -> String {
    "config.json".to_string()
}

fn default_i18n() -> String {
    "i18n".to_string()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            config: default_store_config(),
            i18n: default_i18n(),
        }
    }
}

/// Cart storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for the persisted cart.
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// Key the cart blob is stored under.
    #[serde(default = "default_cart_key")]
    pub key: String,
}

fn default_storage_dir() -> String {
    ".shopfront".to_string()
}

fn default_cart_key() -> String {
    shopfront_commerce::cart::CART_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            key: default_cart_key(),
        }
    }
}

/// Defaults for the current shopping session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// UI language code.
    #[serde(default = "default_language")]
    pub language: String,

    /// Destination country for shipping estimates.
    #[serde(default)]
    pub country: Option<String>,

    /// Whether estimates include VAT.
    #[serde(default)]
    pub include_vat: bool,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            country: None,
            include_vat: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.sources.catalog, "products.json");
        assert_eq!(config.sources.i18n, "i18n");
        assert_eq!(config.storage.key, "gies_cart");
        assert_eq!(config.session.language, "en");
        assert!(!config.session.include_vat);
    }

    #[test]
    fn test_partial_toml() {
        let config: CliConfig = toml::from_str(
            r#"
[sources]
catalog = "https://shop.example.com/products.json"

[session]
country = "AE"
include_vat = true
"#,
        )
        .unwrap();

        assert_eq!(config.sources.catalog, "https://shop.example.com/products.json");
        assert_eq!(config.sources.config, "config.json");
        assert_eq!(config.session.country.as_deref(), Some("AE"));
        assert!(config.session.include_vat);
        assert_eq!(config.storage.dir, ".shopfront");
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopfront.json");
        std::fs::write(&path, r#"{"session":{"language":"ar"}}"#).unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.session.language, "ar");
    }
}
