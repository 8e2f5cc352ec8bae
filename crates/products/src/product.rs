use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product as supplied by the listing page.
///
/// Only the fields the filters read are typed. Everything else in the source
/// record (id, title, images, ...) is kept in `attributes` so a filtered list
/// serializes back to the same shape it was loaded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Price before discount.
    pub price: f64,
    /// Percent discount applied to `price`, nominally in `[0, 100]`.
    #[serde(default)]
    pub discount_percentage: f64,
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    pub fn new(
        price: f64,
        discount_percentage: f64,
        category: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            price,
            discount_percentage,
            category: category.into(),
            rating,
            attributes: Map::new(),
        }
    }

    /// Attach an opaque attribute (builder style).
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Price after discount. Used by both sorting and the price ceiling.
    pub fn discounted_price(&self) -> f64 {
        discounted_price(self.price, self.discount_percentage)
    }
}

/// `price - price * (discount_percentage / 100)`.
///
/// Out-of-range discounts are not clamped.
pub fn discounted_price(price: f64, discount_percentage: f64) -> f64 {
    price - price * (discount_percentage / 100.0)
}

/// Highest pre-discount price in the list, or `None` for an empty list.
///
/// The scan starts from zero, so a list of only negative prices yields `0`.
pub fn max_price(products: &[Product]) -> Option<f64> {
    if products.is_empty() {
        return None;
    }

    Some(
        products
            .iter()
            .fold(0.0, |acc, p| if p.price > acc { p.price } else { acc }),
    )
}
