//! Cart pricing: subtotal, shipping, VAT and grand total.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::{ShippingRule, ShippingTable};
use crate::error::CommerceError;
use crate::ids::CountryCode;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a cart. Derived on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of resolvable line totals.
    pub subtotal: Money,
    /// Total shipping weight in kilograms.
    pub weight_kg: f64,
    pub shipping_total: Money,
    /// VAT on subtotal plus shipping; zero when VAT is excluded.
    pub tax_total: Money,
    /// `subtotal + shipping_total + tax_total`.
    pub grand_total: Money,
}

impl CartPricing {
    /// Price a cart against a resolved shipping rule.
    pub fn with_rule(
        cart: &Cart,
        catalog: &Catalog,
        rule: &ShippingRule,
        include_vat: bool,
    ) -> Result<Self, CommerceError> {
        let currency = catalog.currency();
        let subtotal = cart.total(catalog)?;
        let weight_kg = cart.weight_kg(catalog);
        let shipping_total = rule.fee(weight_kg, currency)?;

        let taxable = subtotal
            .try_add(&shipping_total)
            .ok_or(CommerceError::Overflow)?;
        let tax_total = if include_vat {
            taxable.multiply_decimal(rule.vat_rate())
        } else {
            Money::zero(currency)
        };
        let grand_total = taxable.try_add(&tax_total).ok_or(CommerceError::Overflow)?;

        Ok(Self {
            subtotal,
            weight_kg,
            shipping_total,
            tax_total,
            grand_total,
        })
    }

    /// One-line breakdown, e.g. `$522.50 (Items: $450.00 · Ship: $25.00 · VAT: $47.50)`.
    pub fn breakdown(&self) -> String {
        format!(
            "{} (Items: {} \u{00b7} Ship: {} \u{00b7} VAT: {})",
            self.grand_total, self.subtotal, self.shipping_total, self.tax_total
        )
    }
}

impl Cart {
    /// Price the cart for delivery to `country`.
    ///
    /// Fails with [`CommerceError::ShippingRuleNotFound`] when the country
    /// has no rule.
    pub fn calculate_pricing(
        &self,
        catalog: &Catalog,
        shipping: &ShippingTable,
        country: &CountryCode,
        include_vat: bool,
    ) -> Result<CartPricing, CommerceError> {
        let rule = shipping.rule(country)?;
        CartPricing::with_rule(self, catalog, rule, include_vat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;
    use crate::money::Currency;

    fn usd(amount: f64) -> Money {
        Money::from_decimal(amount, Currency::USD)
    }

    fn scenario_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add("A");
        cart.add("A");
        cart.add("B");
        cart
    }

    fn table() -> ShippingTable {
        ShippingTable::new().with_rule("AE", ShippingRule::new(10.0, 5.0).with_vat(0.1))
    }

    #[test]
    fn test_pricing_with_vat() {
        let catalog = sample_catalog();
        let pricing = scenario_cart()
            .calculate_pricing(&catalog, &table(), &CountryCode::new("AE"), true)
            .unwrap();

        assert_eq!(pricing.subtotal, usd(450.0));
        assert_eq!(pricing.weight_kg, 3.0);
        assert_eq!(pricing.shipping_total, usd(25.0));
        assert_eq!(pricing.tax_total, usd(47.5));
        assert_eq!(pricing.grand_total, usd(522.5));
    }

    #[test]
    fn test_pricing_without_vat() {
        let catalog = sample_catalog();
        let pricing = scenario_cart()
            .calculate_pricing(&catalog, &table(), &CountryCode::new("AE"), false)
            .unwrap();

        assert!(pricing.tax_total.is_zero());
        assert_eq!(pricing.grand_total, usd(475.0));
    }

    #[test]
    fn test_unset_vat_rate_is_zero() {
        let catalog = sample_catalog();
        let rule = ShippingRule::new(10.0, 5.0);
        let pricing = CartPricing::with_rule(&scenario_cart(), &catalog, &rule, true).unwrap();
        assert!(pricing.tax_total.is_zero());
    }

    #[test]
    fn test_unknown_country_is_reported() {
        let catalog = sample_catalog();
        let result = scenario_cart().calculate_pricing(
            &catalog,
            &table(),
            &CountryCode::new("ZZ"),
            true,
        );
        assert!(matches!(result, Err(CommerceError::ShippingRuleNotFound(c)) if c == "ZZ"));
    }

    #[test]
    fn test_empty_cart_still_pays_base_fee() {
        let catalog = sample_catalog();
        let pricing = Cart::new()
            .calculate_pricing(&catalog, &table(), &CountryCode::new("AE"), false)
            .unwrap();
        assert_eq!(pricing.shipping_total, usd(10.0));
        assert_eq!(pricing.grand_total, usd(10.0));
    }

    #[test]
    fn test_breakdown() {
        let catalog = sample_catalog();
        let pricing = scenario_cart()
            .calculate_pricing(&catalog, &table(), &CountryCode::new("AE"), true)
            .unwrap();
        assert_eq!(
            pricing.breakdown(),
            "$522.50 (Items: $450.00 \u{00b7} Ship: $25.00 \u{00b7} VAT: $47.50)"
        );
    }
}
