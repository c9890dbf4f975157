//! Key-value cache over text blobs.

use std::path::Path;

use crate::backend::{FileStore, MemoryStore, Store};
use crate::CacheError;

/// Cache over a [`Store`] backend.
///
/// Values are already-serialized text blobs that callers parse themselves.
pub struct Cache {
    store: Box<dyn Store + Send + Sync>,
}

impl Cache {
    /// Wrap an arbitrary backend.
    pub fn new(store: impl Store + Send + Sync + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Open an in-memory cache.
    pub fn memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Open a cache persisted under `dir`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::open_dir(".shopfront")?;
    /// ```
    pub fn open_dir(dir: impl AsRef<Path>) -> Result<Self, CacheError> {
        Ok(Self::new(FileStore::open(dir)?))
    }

    /// Get the stored blob as text, without interpreting it.
    ///
    /// Non-UTF-8 content is returned lossily; callers parse it themselves.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self
            .store
            .get(key)?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Store an already-serialized blob.
    pub fn set_raw(&self, key: &str, blob: &str) -> Result<(), CacheError> {
        self.store.set(key, blob.as_bytes())
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_roundtrip() {
        let cache = Cache::memory();
        assert_eq!(cache.get_raw("gies_cart").unwrap(), None);

        cache.set_raw("gies_cart", r#"{"A":2}"#).unwrap();
        assert_eq!(cache.get_raw("gies_cart").unwrap().as_deref(), Some(r#"{"A":2}"#));
    }

    #[test]
    fn test_malformed_blob_returned_verbatim() {
        let cache = Cache::memory();
        cache.set_raw("gies_cart", "not json").unwrap();
        assert_eq!(cache.get_raw("gies_cart").unwrap().as_deref(), Some("not json"));
    }

    #[test]
    fn test_open_dir() {
        let dir = tempfile::tempdir().unwrap();
        {
            let cache = Cache::open_dir(dir.path()).unwrap();
            cache.set_raw("settings", "[1,2,3]").unwrap();
        }
        let cache = Cache::open_dir(dir.path()).unwrap();
        assert_eq!(cache.get_raw("settings").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_custom_backend() {
        let cache = Cache::new(MemoryStore::new());
        cache.set_raw("k", "v").unwrap();
        assert_eq!(cache.get_raw("k").unwrap().as_deref(), Some("v"));
    }
}
