//! Cart contents and derived totals.

use std::collections::BTreeMap;

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shopping cart: SKU to quantity.
///
/// Quantities are always at least 1; removing an entry deletes it. SKUs are
/// not checked against the catalog, so an entry may outlive its product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: BTreeMap<ProductId, i64>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `sku`, returning the new quantity.
    pub fn add(&mut self, sku: impl Into<ProductId>) -> i64 {
        let quantity = self.items.entry(sku.into()).or_insert(0);
        *quantity = quantity.saturating_add(1);
        *quantity
    }

    /// Remove the entry for `sku` whatever its quantity.
    ///
    /// Returns whether an entry was present; removing twice is a no-op.
    pub fn remove(&mut self, sku: &ProductId) -> bool {
        self.items.remove(sku).is_some()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn quantity(&self, sku: &ProductId) -> Option<i64> {
        self.items.get(sku).copied()
    }

    /// Entries in SKU order.
    pub fn entries(&self) -> impl Iterator<Item = (&ProductId, i64)> {
        self.items.iter().map(|(sku, qty)| (sku, *qty))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> i64 {
        self.items.values().sum()
    }

    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of price times quantity. SKUs missing from `catalog` add nothing.
    pub fn total(&self, catalog: &Catalog) -> Result<Money, CommerceError> {
        self.lines(catalog)?
            .iter()
            .try_fold(Money::zero(catalog.currency()), |acc, line| {
                acc.try_add(&line.line_total)
            })
            .ok_or(CommerceError::Overflow)
    }

    /// Total shipping weight; missing products and weights count as zero.
    pub fn weight_kg(&self, catalog: &Catalog) -> f64 {
        self.entries()
            .filter_map(|(sku, qty)| {
                catalog
                    .get(sku.as_str())
                    .map(|p| p.weight_kg.unwrap_or(0.0) * qty as f64)
            })
            .sum()
    }

    /// Entries resolved against the catalog; unknown SKUs are skipped.
    pub fn lines<'a>(&self, catalog: &'a Catalog) -> Result<Vec<CartLine<'a>>, CommerceError> {
        self.entries()
            .filter_map(|(sku, quantity)| catalog.get(sku.as_str()).map(|p| (p, quantity)))
            .map(|(product, quantity)| {
                let line_total = product
                    .price
                    .try_multiply(quantity)
                    .ok_or(CommerceError::Overflow)?;
                Ok(CartLine {
                    product,
                    quantity,
                    line_total,
                })
            })
            .collect()
    }

    /// Serialize to the persisted blob: a JSON object of SKU to quantity.
    pub fn serialize(&self) -> String {
        serde_json::to_string(&self.items).unwrap_or_else(|_| "{}".to_string())
    }

    /// Rebuild a cart from a persisted blob.
    ///
    /// Missing or malformed input gives an empty cart. Entries with a
    /// quantity below 1 are dropped.
    pub fn restore(blob: Option<&str>) -> Self {
        let Some(blob) = blob else {
            return Self::new();
        };

        match serde_json::from_str::<Option<BTreeMap<ProductId, i64>>>(blob) {
            Ok(items) => {
                let mut items = items.unwrap_or_default();
                items.retain(|_, qty| *qty >= 1);
                Self { items }
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed persisted cart");
                Self::new()
            }
        }
    }
}

/// A cart entry joined with its product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: i64,
    /// `unit price * quantity`.
    pub line_total: Money,
}
