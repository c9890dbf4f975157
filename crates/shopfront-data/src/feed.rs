//! Fail-soft feed loading.

use serde::de::DeserializeOwned;

use crate::{FetchClient, Source};

/// Load and parse a JSON feed, or fall back to `T::default()`.
///
/// Missing files, network errors, non-2xx statuses and malformed bodies are
/// logged and never propagated, so a broken feed leaves the store empty
/// instead of failing the session.
pub async fn load_or_default<T>(client: &FetchClient, source: &Source, what: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match client.get_json::<T>(source).await {
        Ok(value) => {
            tracing::debug!(feed = what, source = %source, "feed loaded");
            value
        }
        Err(e) => {
            tracing::error!(feed = what, source = %source, error = %e, "failed to load feed");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Settings {
        #[serde(default)]
        order_email: Option<String>,
    }

    #[tokio::test]
    async fn test_loads_valid_feed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"order_email":"orders@example.com"}"#).unwrap();

        let settings: Settings = load_or_default(&FetchClient::new(), &Source::File(path), "config").await;
        assert_eq!(settings.order_email.as_deref(), Some("orders@example.com"));
    }

    #[tokio::test]
    async fn test_missing_feed_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::File(dir.path().join("config.json"));

        let settings: Settings = load_or_default(&FetchClient::new(), &source, "config").await;
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn test_malformed_feed_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, "[{").unwrap();

        let products: Vec<serde_json::Value> =
            load_or_default(&FetchClient::new(), &Source::File(path), "catalog").await;
        assert!(products.is_empty());
    }
}
