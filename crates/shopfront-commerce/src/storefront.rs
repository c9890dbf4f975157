//! Storefront session context.
//!
//! [`Storefront`] owns everything a session needs: the catalog, the
//! persisted cart, store configuration and the active dictionary. Callers
//! pass it around explicitly instead of reaching for globals.

use crate::cart::{CartLine, CartPricing, CartStore};
use crate::catalog::{Catalog, Product};
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::i18n::{Dictionary, Language};
use crate::ids::{CountryCode, ProductId};
use crate::money::Money;
use crate::search::FilterCriteria;

/// Outcome of the shipping step of [`Storefront::cart_view`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShippingEstimate {
    /// The store has no shipping configuration.
    Unavailable,
    /// No destination country has been chosen yet.
    Pending,
    /// Full breakdown for the chosen country.
    Quoted(CartPricing),
    /// The chosen country has no shipping rule.
    NoRule(CountryCode),
}

impl ShippingEstimate {
    pub fn pricing(&self) -> Option<&CartPricing> {
        match self {
            ShippingEstimate::Quoted(pricing) => Some(pricing),
            _ => None,
        }
    }
}

/// Rendered cart: resolved lines, subtotal and the shipping estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView<'a> {
    pub lines: Vec<CartLine<'a>>,
    pub subtotal: Money,
    pub shipping: ShippingEstimate,
}

impl CartView<'_> {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One browsing session over a loaded store.
#[derive(Debug)]
pub struct Storefront {
    pub catalog: Catalog,
    pub cart: CartStore,
    pub config: StoreConfig,
    pub dictionary: Dictionary,
    pub language: Language,
}

impl Storefront {
    pub fn new(catalog: Catalog, cart: CartStore, config: StoreConfig) -> Self {
        Self {
            catalog,
            cart,
            config,
            dictionary: Dictionary::default(),
            language: Language::default(),
        }
    }

    pub fn with_language(mut self, language: Language, dictionary: Dictionary) -> Self {
        self.language = language;
        self.dictionary = dictionary;
        self
    }

    /// Add one unit of `sku`. Unknown SKUs are accepted and ignored by
    /// totals until the catalog knows them.
    pub fn add_to_cart(&mut self, sku: impl Into<ProductId>) -> i64 {
        let sku = sku.into();
        if self.catalog.get(sku.as_str()).is_none() {
            tracing::debug!(sku = %sku, "adding sku not present in catalog");
        }
        let quantity = self.cart.add(sku.clone());
        tracing::debug!(sku = %sku, quantity, "added to cart");
        quantity
    }

    pub fn remove_from_cart(&mut self, sku: &ProductId) -> bool {
        let removed = self.cart.remove(sku);
        tracing::debug!(sku = %sku, removed, "removed from cart");
        removed
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        tracing::debug!("cart cleared");
    }

    /// Catalog products passing `criteria`, in feed order.
    pub fn visible_products(&self, criteria: &FilterCriteria) -> Vec<&Product> {
        self.catalog.filter(criteria)
    }

    pub fn cart_total(&self) -> Result<Money, CommerceError> {
        self.cart.cart().total(&self.catalog)
    }

    /// Render the cart: resolve lines and subtotal, then run the shipping
    /// estimate for `country`.
    pub fn cart_view(
        &self,
        country: Option<&CountryCode>,
        include_vat: bool,
    ) -> Result<CartView<'_>, CommerceError> {
        let cart = self.cart.cart();
        let lines = cart.lines(&self.catalog)?;
        let subtotal = cart.total(&self.catalog)?;

        let shipping = match (&self.config.shipping, country) {
            (None, _) => ShippingEstimate::Unavailable,
            (Some(_), None) => ShippingEstimate::Pending,
            (Some(table), Some(country)) => {
                match cart.calculate_pricing(&self.catalog, table, country, include_vat) {
                    Ok(pricing) => ShippingEstimate::Quoted(pricing),
                    Err(CommerceError::ShippingRuleNotFound(_)) => {
                        ShippingEstimate::NoRule(country.clone())
                    }
                    Err(e) => return Err(e),
                }
            }
        };

        Ok(CartView {
            lines,
            subtotal,
            shipping,
        })
    }
}
