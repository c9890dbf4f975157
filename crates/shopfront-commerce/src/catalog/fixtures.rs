//! Shared test catalog.

use crate::catalog::{Catalog, Product};
use crate::money::{Currency, Money};

/// Four products covering every optional-attribute combination the
/// filters and pricing care about.
pub(crate) fn sample_catalog() -> Catalog {
    let usd = |amount: f64| Money::from_decimal(amount, Currency::USD);
    Catalog::new(
        vec![
            Product::new("A", "Inverter 5kW", usd(100.0))
                .with_category("Inverters")
                .with_kw(5.0)
                .with_weight_kg(1.0),
            Product::new("B", "Battery", usd(250.0))
                .with_category("Batteries")
                .with_kw(10.0)
                .with_weight_kg(1.0),
            Product::new("C", "Solar Panel", usd(80.0)).with_category("Panels"),
            Product::new("D", "Inverter 3kW", usd(60.0))
                .with_category("Inverters")
                .with_kw(3.0)
                .with_weight_kg(0.5),
        ],
        Currency::USD,
    )
    .expect("fixture catalog is valid")
}
