//! Store configuration loaded from `config.json`.

use crate::checkout::ShippingTable;
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Default subject line for emailed orders.
pub const DEFAULT_ORDER_SUBJECT: &str = "GIES Order";

/// Session-wide store settings. Read-only once loaded.
///
/// Every field is optional; an unreadable config file yields the default,
/// which disables the shipping estimator and every outbound integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Shipping rules; `None` disables the shipping estimate entirely.
    #[serde(default)]
    pub shipping: Option<ShippingTable>,
    /// CRM endpoint that receives checkout events.
    #[serde(default)]
    pub crm_webhook_url: Option<String>,
    #[serde(default)]
    pub paypal_client_id: Option<String>,
    #[serde(default)]
    pub stripe_publishable_key: Option<String>,
    /// Recipient of emailed orders.
    #[serde(default)]
    pub order_email: Option<String>,
    #[serde(default)]
    pub order_subject: Option<String>,
    /// Currency of catalog prices and shipping fees.
    #[serde(default)]
    pub currency: Option<Currency>,
}

impl StoreConfig {
    pub fn currency(&self) -> Currency {
        self.currency.unwrap_or_default()
    }

    pub fn order_subject(&self) -> &str {
        self.order_subject.as_deref().unwrap_or(DEFAULT_ORDER_SUBJECT)
    }

    /// Webhook URL, if one is configured and non-blank.
    pub fn webhook_url(&self) -> Option<&str> {
        non_blank(self.crm_webhook_url.as_deref())
    }

    pub fn order_email(&self) -> Option<&str> {
        non_blank(self.order_email.as_deref())
    }

    pub fn paypal_client_id(&self) -> Option<&str> {
        non_blank(self.paypal_client_id.as_deref())
    }

    pub fn stripe_key(&self) -> Option<&str> {
        non_blank(self.stripe_publishable_key.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
