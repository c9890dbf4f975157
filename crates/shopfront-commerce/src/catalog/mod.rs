//! Product catalog module.
//!
//! Contains the product types and the read-only catalog store.

mod product;
mod store;

#[cfg(test)]
pub(crate) mod fixtures;

pub use product::{Product, ProductRecord};
pub use store::{deep_link_sku, Catalog};
