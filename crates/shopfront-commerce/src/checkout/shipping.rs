//! Per-country shipping rules.

use std::collections::BTreeMap;

use crate::error::CommerceError;
use crate::ids::CountryCode;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Fee formula for one destination country.
///
/// Amounts are decimal numbers in the store currency, as written in the
/// store configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingRule {
    /// Flat fee per shipment.
    pub base: f64,
    /// Fee per kilogram of cart weight.
    #[serde(rename = "perKg")]
    pub per_kg: f64,
    /// VAT rate as a fraction (0.05 = 5%).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<f64>,
}

impl ShippingRule {
    pub fn new(base: f64, per_kg: f64) -> Self {
        Self {
            base,
            per_kg,
            vat: None,
        }
    }

    pub fn with_vat(mut self, rate: f64) -> Self {
        self.vat = Some(rate);
        self
    }

    /// Effective VAT rate; an unset rate is zero.
    pub fn vat_rate(&self) -> f64 {
        self.vat.unwrap_or(0.0)
    }

    /// `base + per_kg * weight_kg`, rounded once to the minor unit.
    pub fn fee(&self, weight_kg: f64, currency: Currency) -> Result<Money, CommerceError> {
        Money::try_from_decimal(self.base + self.per_kg * weight_kg, currency)
            .ok_or(CommerceError::Overflow)
    }
}

/// Shipping section of the store configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingTable {
    #[serde(default)]
    pub countries: BTreeMap<CountryCode, ShippingRule>,
}

impl ShippingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, country: impl Into<CountryCode>, rule: ShippingRule) -> Self {
        self.countries.insert(country.into(), rule);
        self
    }

    /// Resolve the rule for a country.
    ///
    /// A missing rule is an error, never a zero fee.
    pub fn rule(&self, country: &CountryCode) -> Result<&ShippingRule, CommerceError> {
        self.countries
            .get(country)
            .ok_or_else(|| CommerceError::ShippingRuleNotFound(country.to_string()))
    }

    /// Configured destination codes, sorted.
    pub fn countries(&self) -> impl Iterator<Item = &CountryCode> {
        self.countries.keys()
    }
}
