//! Feed loading and outbound HTTP for Shopfront.
//!
//! Reads the JSON feeds a storefront is built from (catalog, store config,
//! dictionaries) from local files or remote URLs, and posts checkout events
//! to a CRM webhook.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_data::{load_or_default, FetchClient, Source};
//!
//! let client = FetchClient::new();
//! let config: StoreConfig =
//!     load_or_default(&client, &Source::parse("site/config.json")?, "store config").await;
//! ```

mod error;
mod feed;
mod response;
mod source;
mod webhook;

pub use error::FetchError;
pub use feed::load_or_default;
pub use response::Response;
pub use source::Source;
pub use webhook::post_best_effort;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Client for reading feeds and posting JSON.
///
/// Wraps a `reqwest::Client` for remote sources and `tokio::fs` for local
/// ones.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    http: reqwest::Client,
}

impl FetchClient {
    /// Create a new client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a source, returning the raw response.
    pub async fn fetch(&self, source: &Source) -> Result<Response, FetchError> {
        match source {
            Source::File(path) => {
                let body = tokio::fs::read(path).await.map_err(|e| FetchError::Io {
                    path: path.clone(),
                    source: e,
                })?;
                Ok(Response::from_file(body))
            }
            Source::Http(url) => {
                let response = self.http.get(url).send().await?;
                Response::from_http(response).await
            }
        }
    }

    /// Read a source and parse it as JSON. Non-2xx responses are errors.
    pub async fn get_json<T: DeserializeOwned>(&self, source: &Source) -> Result<T, FetchError> {
        let response = self.fetch(source).await?.error_for_status()?;
        response.json()
    }

    /// POST `body` as JSON to `url`. Non-2xx responses are errors.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<Response, FetchError> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }
        let response = self.http.post(url).json(body).send().await?;
        Response::from_http(response).await?.error_for_status()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{load_or_default, post_best_effort, FetchClient, FetchError, Response, Source};
}
