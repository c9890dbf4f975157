//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog, cart and pricing operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog records share a SKU.
    #[error("Duplicate product SKU in catalog: {0}")]
    DuplicateProduct(String),

    /// Price is negative or not a finite number.
    #[error("Invalid price for {sku}: {price}")]
    InvalidPrice { sku: String, price: f64 },

    /// No shipping rule is configured for the selected country.
    #[error("No shipping rule configured for country: {0}")]
    ShippingRuleNotFound(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
