//! Product types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product as it appears in the catalog feed.
///
/// Prices are decimal numbers in the feed; [`ProductRecord::into_product`]
/// converts them into [`Money`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub sku: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Rated capacity in kW.
    #[serde(default)]
    pub kw: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    /// Hosted payment page for direct purchase.
    #[serde(default, rename = "paymentLink")]
    pub payment_link: Option<String>,
}

impl ProductRecord {
    /// Validate the record and convert it into a catalog product.
    pub fn into_product(self, currency: Currency) -> Result<Product, CommerceError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CommerceError::InvalidPrice {
                sku: self.sku,
                price: self.price,
            });
        }

        Ok(Product {
            sku: ProductId::new(self.sku),
            name: self.name,
            price: Money::from_decimal(self.price, currency),
            description: self.description,
            category: self.category,
            kw: self.kw,
            weight_kg: self.weight_kg,
            image: self.image,
            payment_link: self.payment_link,
        })
    }
}

/// A product in the catalog. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Stock keeping unit (unique within the catalog).
    pub sku: ProductId,
    pub name: String,
    /// Unit price, never negative.
    pub price: Money,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Capacity attribute used by the range filters.
    pub kw: Option<f64>,
    /// Shipping weight per unit.
    pub weight_kg: Option<f64>,
    pub image: Option<String>,
    pub payment_link: Option<String>,
}

impl Product {
    /// Create a product with only the required fields set.
    pub fn new(sku: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            price,
            description: None,
            category: None,
            kw: None,
            weight_kg: None,
            image: None,
            payment_link: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_kw(mut self, kw: f64) -> Self {
        self.kw = Some(kw);
        self
    }

    pub fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Relative path of the static product page for a language,
    /// e.g. `en/product-inv-5kw.html`.
    pub fn page_path(&self, lang: &str) -> String {
        format!("{}/product-{}.html", lang, self.sku.as_str().to_lowercase())
    }

    /// Whether the product can be bought directly through a payment link.
    pub fn has_payment_link(&self) -> bool {
        self.payment_link.as_deref().map_or(false, |link| !link.is_empty())
    }
}
