//! Cart persistence.

use shopfront_cache::Cache;

use crate::cart::Cart;
use crate::ids::ProductId;

/// Storage key of the persisted cart blob.
pub const CART_STORAGE_KEY: &str = "gies_cart";

/// A [`Cart`] that writes itself back to storage after every mutation.
///
/// Storage failures never block a mutation: the in-memory cart stays
/// authoritative and the failure is logged.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    cache: Cache,
    key: String,
}

impl CartStore {
    /// Restore the cart from `cache` under the default key.
    pub fn restore(cache: Cache) -> Self {
        Self::restore_with_key(cache, CART_STORAGE_KEY)
    }

    /// Restore the cart from `cache` under `key`.
    pub fn restore_with_key(cache: Cache, key: impl Into<String>) -> Self {
        let key = key.into();
        let blob = match cache.get_raw(&key) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "could not read persisted cart");
                None
            }
        };
        let cart = Cart::restore(blob.as_deref());
        tracing::debug!(key = %key, items = cart.unique_item_count(), "cart restored");
        Self { cart, cache, key }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Add one unit and persist. Returns the new quantity.
    pub fn add(&mut self, sku: impl Into<ProductId>) -> i64 {
        let quantity = self.cart.add(sku);
        self.persist();
        quantity
    }

    /// Remove an entry and persist. Returns whether it was present.
    pub fn remove(&mut self, sku: &ProductId) -> bool {
        let removed = self.cart.remove(sku);
        self.persist();
        removed
    }

    /// Empty the cart and persist.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Write the current cart to storage, returning whether the write landed.
    pub fn persist(&self) -> bool {
        match self.cache.set_raw(&self.key, &self.cart.serialize()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to persist cart");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_cache::{CacheError, Store};

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl Store for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &[u8]) -> Result<(), CacheError> {
            Err(CacheError::StoreError("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_mutations_are_persisted() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = CartStore::restore(Cache::open_dir(dir.path()).unwrap());
        store.add("A");
        store.add("A");
        store.add("B");
        store.remove(&ProductId::new("B"));

        let reloaded = CartStore::restore(Cache::open_dir(dir.path()).unwrap());
        assert_eq!(reloaded.cart(), store.cart());
        assert_eq!(reloaded.cart().quantity(&ProductId::new("A")), Some(2));
    }

    #[test]
    fn test_clear_persists_empty_cart() {
        let cache = Cache::memory();
        cache.set_raw(CART_STORAGE_KEY, r#"{"A":1}"#).unwrap();

        let mut store = CartStore::restore(cache);
        assert_eq!(store.cart().item_count(), 1);
        store.clear();
        assert!(store.cart().is_empty());
        assert!(store.persist());
    }

    #[test]
    fn test_malformed_blob_restores_empty() {
        let cache = Cache::memory();
        cache.set_raw(CART_STORAGE_KEY, "{broken").unwrap();
        let store = CartStore::restore(cache);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_write_failure_does_not_block_mutation() {
        let mut store = CartStore::restore(Cache::new(ReadOnlyStore));
        assert_eq!(store.add("A"), 1);
        assert_eq!(store.add("A"), 2);
        assert!(!store.persist());
        assert_eq!(store.cart().quantity(&ProductId::new("A")), Some(2));
    }

    #[test]
    fn test_custom_key() {
        let store = CartStore::restore_with_key(Cache::memory(), "cart_v2");
        assert_eq!(store.key(), "cart_v2");
    }
}
