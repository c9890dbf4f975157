//! CRM webhook payloads.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::order_summary;
use crate::error::CommerceError;
use serde::Serialize;

/// Checkout event reported to the CRM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutEvent {
    /// The quote form was submitted.
    QuoteRequest,
    /// The customer started a Stripe checkout.
    StripeIntent,
    /// A PayPal order was captured.
    PaypalCheckout,
}

/// JSON body POSTed to the CRM webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookPayload {
    #[serde(rename = "type")]
    pub event: CheckoutEvent,
    pub cart: Cart,
    /// Payment provider's order details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<String>>,
    /// Cart total as a decimal number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

impl WebhookPayload {
    fn new(event: CheckoutEvent, cart: &Cart) -> Self {
        Self {
            event,
            cart: cart.clone(),
            order: None,
            summary: None,
            total: None,
        }
    }

    pub fn quote_request(cart: &Cart, catalog: &Catalog) -> Self {
        let mut payload = Self::new(CheckoutEvent::QuoteRequest, cart);
        payload.summary = Some(order_summary(cart, catalog));
        payload
    }

    pub fn stripe_intent(cart: &Cart, catalog: &Catalog) -> Result<Self, CommerceError> {
        let mut payload = Self::new(CheckoutEvent::StripeIntent, cart);
        payload.total = Some(cart.total(catalog)?.to_decimal());
        Ok(payload)
    }

    pub fn paypal_checkout(cart: &Cart, order: serde_json::Value) -> Self {
        let mut payload = Self::new(CheckoutEvent::PaypalCheckout, cart);
        payload.order = Some(order);
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;
    use serde_json::json;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add("A");
        cart.add("B");
        cart
    }

    #[test]
    fn test_quote_request_payload() {
        let catalog = sample_catalog();
        let payload = WebhookPayload::quote_request(&cart(), &catalog);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "type": "quote_request",
                "cart": {"A": 1, "B": 1},
                "summary": ["Inverter 5kW x 1", "Battery x 1"]
            })
        );
    }

    #[test]
    fn test_stripe_intent_carries_total() {
        let catalog = sample_catalog();
        let payload = WebhookPayload::stripe_intent(&cart(), &catalog).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"type": "stripe_intent", "cart": {"A": 1, "B": 1}, "total": 350.0})
        );
    }

    #[test]
    fn test_paypal_checkout_carries_order() {
        let payload = WebhookPayload::paypal_checkout(&cart(), json!({"id": "5O190127TN364715T"}));
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "paypal_checkout");
        assert_eq!(value["order"]["id"], "5O190127TN364715T");
        assert!(value.get("total").is_none());
        assert!(value.get("summary").is_none());
    }
}
