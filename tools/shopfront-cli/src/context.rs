//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopfront_cache::Cache;
use shopfront_commerce::catalog::{Catalog, ProductRecord};
use shopfront_commerce::cart::CartStore;
use shopfront_commerce::config::StoreConfig;
use shopfront_commerce::i18n::{Dictionary, Language};
use shopfront_commerce::storefront::Storefront;
use shopfront_commerce::CountryCode;
use shopfront_data::{load_or_default, FetchClient, Source};

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["shopfront.toml", ".shopfront.toml", "shopfront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Directory relative sources resolve against.
    pub root: PathBuf,
    /// Feed and webhook client.
    pub client: FetchClient,
}

impl Context {
    /// Load context from config file.
    ///
    /// `language` overrides `[session] language` when given.
    pub fn load(config_path: Option<&str>, language: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, root) = if let Some(path) = config_path {
            let root = Path::new(path)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.clone());
            (CliConfig::load(path)?, root)
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_else(|| (CliConfig::default(), cwd.clone()))
        };

        Ok(Self::from_config(config, root, language, output))
    }

    fn from_config(
        mut config: CliConfig,
        root: PathBuf,
        language: Option<&str>,
        output: Output,
    ) -> Self {
        if let Some(language) = language.map(str::trim).filter(|l| !l.is_empty()) {
            config.session.language = language.to_string();
        }
        let output = output.with_rtl(Language::new(&config.session.language).is_rtl());

        Self {
            config,
            output,
            root,
            client: FetchClient::new(),
        }
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, current));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a feed location; relative paths are taken from the config root.
    pub fn source(&self, location: &str) -> Result<Source> {
        let source = Source::parse(location)
            .with_context(|| format!("Invalid feed location: {}", location))?;
        Ok(match source {
            Source::File(path) if path.is_relative() => Source::File(self.root.join(path)),
            other => other,
        })
    }

    /// Destination country: `arg` if given, else the session default.
    ///
    /// Codes are trimmed but otherwise matched exactly against the shipping
    /// table, so `ae` and `AE` are different countries.
    pub fn country(&self, arg: Option<&str>) -> Option<CountryCode> {
        parse_country(arg).or_else(|| parse_country(self.config.session.country.as_deref()))
    }

    /// Open the cart cache, falling back to memory if the directory is unusable.
    fn open_cache(&self) -> Cache {
        let dir = self.root.join(&self.config.storage.dir);
        match Cache::open_dir(&dir) {
            Ok(cache) => cache,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "cart storage unavailable, using memory");
                Cache::memory()
            }
        }
    }

    /// Load the store: config, then dictionary, then catalog.
    ///
    /// Each feed falls back to its empty default on failure.
    pub async fn storefront(&self) -> Result<Storefront> {
        let spinner = self.output.spinner("Loading store...");

        let store_config: StoreConfig = load_or_default(
            &self.client,
            &self.source(&self.config.sources.config)?,
            "store config",
        )
        .await;

        let language = Language::new(&self.config.session.language);
        spinner.set_message(format!("Loading {} dictionary...", language));
        let dictionary: Dictionary = load_or_default(
            &self.client,
            &self
                .source(&self.config.sources.i18n)?
                .join(&language.dictionary_file()),
            "dictionary",
        )
        .await;

        spinner.set_message("Loading catalog...");
        let records: Vec<ProductRecord> = load_or_default(
            &self.client,
            &self.source(&self.config.sources.catalog)?,
            "catalog",
        )
        .await;

        let catalog = Catalog::from_records(records, store_config.currency());
        spinner.finish_and_clear();

        self.output.debug(&format!(
            "Loaded {} products in {}",
            catalog.len(),
            catalog.currency()
        ));

        let cart = CartStore::restore_with_key(self.open_cache(), self.config.storage.key.clone());
        Ok(Storefront::new(catalog, cart, store_config).with_language(language, dictionary))
    }
}

fn parse_country(code: Option<&str>) -> Option<CountryCode> {
    code.map(str::trim)
        .filter(|c| !c.is_empty())
        .map(CountryCode::new)
}
