//! Category and capacity filters over the catalog.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// User-selected filter criteria. Every unset field matches everything.
///
/// The default value is the "cleared filters" state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact category match.
    pub category: Option<String>,
    /// Inclusive lower bound on `kw`. Products without `kw` count as 0.
    pub min_capacity: Option<f64>,
    /// Inclusive upper bound on `kw`. Products without `kw` count as
    /// infinite and never pass a finite maximum.
    pub max_capacity: Option<f64>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn min_capacity(mut self, min: f64) -> Self {
        self.min_capacity = Some(min);
        self
    }

    pub fn max_capacity(mut self, max: f64) -> Self {
        self.max_capacity = Some(max);
        self
    }

    /// Build criteria from raw form inputs.
    ///
    /// An empty category and blank or non-numeric bounds are treated as unset.
    pub fn from_inputs(category: &str, min: &str, max: &str) -> Self {
        let category = category.trim();
        Self {
            category: (!category.is_empty()).then(|| category.to_string()),
            min_capacity: parse_bound(min),
            max_capacity: parse_bound(max),
        }
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.min_capacity.is_none() && self.max_capacity.is_none()
    }

    /// Check a single product against every criterion.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = match &self.category {
            Some(category) => product.category.as_deref() == Some(category.as_str()),
            None => true,
        };
        let min_ok = match self.min_capacity {
            Some(min) => product.kw.unwrap_or(0.0) >= min,
            None => true,
        };
        let max_ok = match self.max_capacity {
            Some(max) => product.kw.unwrap_or(f64::INFINITY) <= max,
            None => true,
        };
        category_ok && min_ok && max_ok
    }

    /// Matching products, preserving input order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;

    fn skus(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.sku.to_string()).collect()
    }

    #[test]
    fn test_empty_criteria_returns_everything_in_order() {
        let catalog = sample_catalog();
        let visible = catalog.filter(&FilterCriteria::default());
        assert_eq!(skus(&visible), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_category_filter() {
        let catalog = sample_catalog();
        let visible = catalog.filter(&FilterCriteria::new().category("Inverters"));
        assert_eq!(skus(&visible), vec!["A", "D"]);
    }

    #[test]
    fn test_minimum_is_inclusive() {
        let catalog = sample_catalog();
        let visible = catalog.filter(&FilterCriteria::new().min_capacity(5.0));
        assert_eq!(skus(&visible), vec!["A", "B"]);
    }

    #[test]
    fn test_missing_capacity_fails_minimum() {
        let catalog = sample_catalog();
        let panel = catalog.get("C").unwrap();
        assert!(!FilterCriteria::new().min_capacity(5.0).matches(panel));
    }

    #[test]
    fn test_missing_capacity_fails_maximum() {
        let catalog = sample_catalog();
        let panel = catalog.get("C").unwrap();
        assert!(!FilterCriteria::new().max_capacity(5.0).matches(panel));

        let visible = catalog.filter(&FilterCriteria::new().max_capacity(5.0));
        assert_eq!(skus(&visible), vec!["A", "D"]);
    }

    #[test]
    fn test_missing_capacity_passes_when_unbounded() {
        let catalog = sample_catalog();
        let panel = catalog.get("C").unwrap();
        assert!(FilterCriteria::new().category("Panels").matches(panel));
    }

    #[test]
    fn test_combined_criteria_can_match_nothing() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::new()
            .category("Batteries")
            .max_capacity(4.0);
        assert!(catalog.filter(&criteria).is_empty());
    }

    #[test]
    fn test_from_inputs_ignores_blank_and_non_numeric() {
        let criteria = FilterCriteria::from_inputs("", " ", "abc");
        assert!(criteria.is_empty());

        let criteria = FilterCriteria::from_inputs("Panels", "1.5", "NaN");
        assert_eq!(criteria.category.as_deref(), Some("Panels"));
        assert_eq!(criteria.min_capacity, Some(1.5));
        assert_eq!(criteria.max_capacity, None);
    }
}
