//! Key-value storage for Shopfront.
//!
//! Stands in for browser local storage: values are JSON blobs under string
//! keys, held by a pluggable [`Store`] backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_cache::Cache;
//!
//! let cache = Cache::open_dir(".shopfront")?;
//!
//! // Store a blob
//! cache.set_raw("gies_cart", r#"{"INV-5KW":2}"#)?;
//!
//! // Read it back
//! let blob: Option<String> = cache.get_raw("gies_cart")?;
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{FileStore, MemoryStore, Store};
pub use error::CacheError;
pub use kv::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, MemoryStore, Store};
}
