//! Shopping cart module.
//!
//! Contains the cart itself, its persisted store, and pricing.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartLine};
pub use pricing::CartPricing;
pub use store::{CartStore, CART_STORAGE_KEY};
