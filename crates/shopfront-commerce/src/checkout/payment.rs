//! Hand-off data for third-party payment widgets.
//!
//! Capture itself happens inside the provider's widget; this module only
//! builds what the widget needs from the cart.

use crate::config::StoreConfig;
use crate::money::{Currency, Money};
use serde_json::json;

const PAYPAL_SDK_URL: &str = "https://www.paypal.com/sdk/js";

/// Payment providers the store can hand off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentProvider {
    PayPal,
    Stripe,
}

impl PaymentProvider {
    pub fn name(&self) -> &'static str {
        match self {
            PaymentProvider::PayPal => "PayPal",
            PaymentProvider::Stripe => "Stripe",
        }
    }
}

impl StoreConfig {
    /// Providers with credentials present in the config.
    pub fn payment_providers(&self) -> Vec<PaymentProvider> {
        let mut providers = Vec::new();
        if self.paypal_client_id().is_some() {
            providers.push(PaymentProvider::PayPal);
        }
        if self.stripe_key().is_some() {
            providers.push(PaymentProvider::Stripe);
        }
        providers
    }
}

/// Script URL that loads the PayPal buttons for `client_id`.
pub fn paypal_sdk_url(client_id: &str, currency: Currency) -> String {
    format!(
        "{}?client-id={}&currency={}",
        PAYPAL_SDK_URL,
        urlencoding::encode(client_id),
        currency.code()
    )
}

/// Order-creation body for the PayPal widget: one purchase unit for the
/// cart total, two decimals.
pub fn paypal_order_request(total: Money) -> serde_json::Value {
    json!({
        "purchase_units": [
            { "amount": { "value": total.display_amount() } }
        ]
    })
}
