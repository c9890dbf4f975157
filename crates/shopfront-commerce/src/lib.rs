//! Storefront domain types and logic for Shopfront.
//!
//! This crate provides the pieces of a small static-catalog shop:
//!
//! - **Catalog**: Products from the JSON feed, categories, deep links
//! - **Cart**: SKU quantities, persistence, pricing with shipping and VAT
//! - **Search**: Category and capacity filters
//! - **Checkout**: Order summaries, CRM webhook payloads, payment hand-off
//! - **I18n**: UI language and translation dictionaries
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_commerce::prelude::*;
//!
//! let catalog = Catalog::from_records(records, Currency::USD);
//! let mut cart = Cart::new();
//! cart.add("INV-5KW");
//! cart.add("INV-5KW");
//!
//! let pricing = cart.calculate_pricing(&catalog, &shipping, &CountryCode::new("AE"), true)?;
//! println!("{}", pricing.breakdown());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod i18n;
pub mod search;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{deep_link_sku, Catalog, Product, ProductRecord};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartPricing, CartStore, CART_STORAGE_KEY};

    // Checkout
    pub use crate::checkout::{
        mailto_url, order_summary, paypal_order_request, paypal_sdk_url, CheckoutEvent,
        PaymentProvider, ShippingRule, ShippingTable, WebhookPayload,
    };

    // Search
    pub use crate::search::FilterCriteria;

    pub use crate::config::StoreConfig;
    pub use crate::i18n::{Dictionary, Language};
    pub use crate::storefront::{CartView, ShippingEstimate, Storefront};
}
