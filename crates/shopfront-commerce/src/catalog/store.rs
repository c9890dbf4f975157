//! The catalog store: the session's read-only product list.

use std::collections::{BTreeSet, HashSet};

use crate::catalog::{Product, ProductRecord};
use crate::error::CommerceError;
use crate::money::Currency;
use crate::search::FilterCriteria;

/// Ordered, read-only list of products for one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    currency: Currency,
}

impl Catalog {
    /// Build a catalog from already-converted products, keeping their order.
    pub fn new(products: Vec<Product>, currency: Currency) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.sku.as_str()) {
                return Err(CommerceError::DuplicateProduct(product.sku.to_string()));
            }
            if product.price.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: product.price.currency.code().to_string(),
                });
            }
        }
        Ok(Self { products, currency })
    }

    /// Build a catalog from feed records, pricing them in `currency`.
    ///
    /// Records with an invalid price are skipped, as are repeats of a SKU
    /// already seen; the first occurrence wins. Each skip is logged.
    pub fn from_records(records: Vec<ProductRecord>, currency: Currency) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let mut products = Vec::with_capacity(records.len());

        for record in records {
            if seen.contains(record.sku.as_str()) {
                tracing::warn!(sku = %record.sku, "skipping duplicate catalog record");
                continue;
            }
            match record.into_product(currency) {
                Ok(product) => {
                    seen.insert(product.sku.as_str().to_string());
                    products.push(product);
                }
                Err(e) => tracing::warn!(error = %e, "skipping invalid catalog record"),
            }
        }

        Self { products, currency }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Look up a product by SKU.
    pub fn get(&self, sku: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.sku.as_str() == sku)
    }

    /// All products in feed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories, sorted lexicographically.
    pub fn categories(&self) -> Vec<&str> {
        self.products
            .iter()
            .filter_map(|p| p.category.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Products matching `criteria`, in catalog order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Product> {
        criteria.apply(&self.products)
    }
}

/// Extract the SKU from a `#sku=XYZ` deep-link fragment.
///
/// Accepts the fragment with or without the leading `#`, or a full URL.
pub fn deep_link_sku(fragment: &str) -> Option<&str> {
    let hash = match fragment.find('#') {
        Some(idx) => &fragment[idx + 1..],
        None => fragment,
    };
    let (_, sku) = hash.split_once("sku=")?;
    let sku = sku.split('&').next().unwrap_or("");
    if sku.is_empty() {
        None
    } else {
        Some(sku)
    }
}
