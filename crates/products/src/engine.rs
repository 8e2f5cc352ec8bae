//! The filter/sort pipeline.
//!
//! Stages run in a fixed order: category, rating, sort, price. Category and
//! rating commute, but both must precede the sort, and the price stage uses
//! the same discounted price the sort orders by.

use core::cmp::Ordering;

use crate::criteria::{CategoryFilter, FilterCriteria, SortOrder};
use crate::product::Product;

/// Stateless pipeline over a product list.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilterEngine;

impl FilterEngine {
    /// Run every stage and return the surviving products.
    ///
    /// Total over any input: the source list is never mutated and the
    /// function never fails.
    pub fn apply(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
        let staged: Vec<&Product> = products.iter().collect();

        let staged = filter_by_category(staged, &criteria.categories);
        tracing::trace!(remaining = staged.len(), "category stage");

        let staged = filter_by_rating(staged, criteria.min_rating);
        tracing::trace!(remaining = staged.len(), "rating stage");

        let staged = sort_by_price(staged, criteria.sort);

        let staged = filter_by_price(staged, criteria.price_ceiling);
        tracing::debug!(
            input = products.len(),
            output = staged.len(),
            sort = %criteria.sort,
            price_ceiling = criteria.price_ceiling,
            "filter pipeline ran"
        );

        staged.into_iter().cloned().collect()
    }
}

pub fn filter_by_category<'a>(
    products: Vec<&'a Product>,
    categories: &CategoryFilter,
) -> Vec<&'a Product> {
    match categories {
        CategoryFilter::All => products,
        CategoryFilter::Only(_) => products
            .into_iter()
            .filter(|p| categories.matches(&p.category))
            .collect(),
    }
}

pub fn filter_by_rating(products: Vec<&Product>, min_rating: Option<f64>) -> Vec<&Product> {
    match min_rating {
        None => products,
        Some(min) => products.into_iter().filter(|p| p.rating >= min).collect(),
    }
}

/// Stable sort by discounted price.
///
/// Products whose discounted price is NaN are dropped when sorting: they
/// cannot be ordered and would fail the price stage anyway.
pub fn sort_by_price(mut products: Vec<&Product>, order: SortOrder) -> Vec<&Product> {
    if order == SortOrder::Unsorted {
        return products;
    }

    products.retain(|p| !p.discounted_price().is_nan());
    match order {
        SortOrder::Unsorted => {}
        SortOrder::PriceLowToHigh => products.sort_by(|a, b| by_discounted_price(a, b)),
        SortOrder::PriceHighToLow => products.sort_by(|a, b| by_discounted_price(b, a)),
    }
    products
}

/// Total order on non-NaN discounted prices. `-0.0` is folded into `0.0` so
/// the two compare as a tie.
fn by_discounted_price(a: &Product, b: &Product) -> Ordering {
    let key = |p: &Product| p.discounted_price() + 0.0;
    key(a).total_cmp(&key(b))
}

pub fn filter_by_price(products: Vec<&Product>, price_ceiling: f64) -> Vec<&Product> {
    products
        .into_iter()
        .filter(|p| p.discounted_price() <= price_ceiling)
        .collect()
}
