//! Checkout module.
//!
//! Shipping rules, order summaries, CRM webhook payloads and payment-widget
//! hand-off.

mod payment;
mod shipping;
mod summary;
mod webhook;

pub use payment::{paypal_order_request, paypal_sdk_url, PaymentProvider};
pub use shipping::{ShippingRule, ShippingTable};
pub use summary::{mailto_url, order_body, order_summary};
pub use webhook::{CheckoutEvent, WebhookPayload};
