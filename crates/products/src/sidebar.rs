//! The filter sidebar session.
//!
//! [`FilterSidebar`] owns the criteria, the defaults captured at mount and the
//! current product list. Every mutation re-runs [`FilterEngine`] and hands the
//! result to a [`FilterResultSink`] exactly once. There is no hidden
//! scheduling: a host calls [`FilterSidebar::dispatch`] for each user event
//! and the recompute happens before it returns.

use storefront_core::{DomainError, DomainResult, SidebarConfig};

use crate::controls::{self, CategoryCheckbox, PriceSlider, RatingRadio, SortRadio};
use crate::criteria::{FilterCriteria, SortOrder};
use crate::engine::FilterEngine;
use crate::product::{max_price, Product};

/// Consumer of pipeline results.
pub trait FilterResultSink {
    fn on_filter_change(&mut self, filtered: &[Product]);
}

impl<F> FilterResultSink for F
where
    F: FnMut(&[Product]),
{
    fn on_filter_change(&mut self, filtered: &[Product]) {
        self(filtered)
    }
}

/// A discrete user action (or host update) against the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarEvent {
    /// The price slider moved.
    PriceChanged(f64),
    /// A category checkbox was toggled.
    CategoryToggled { value: String, checked: bool },
    /// A minimum-rating radio was selected.
    RatingSelected(f64),
    /// A sort radio was selected.
    SortSelected(SortOrder),
    /// The "Clear" link was followed.
    Cleared,
    /// The host supplied a new product list.
    ProductsReplaced(Vec<Product>),
}

impl SidebarEvent {
    /// Parse a raw form change (`name`, `value`, `checked`) into an event.
    ///
    /// Recognized names: `price`, `category`, `rating`, `sortByPrice`, `clear`.
    /// `price` is taken as-is here; [`FilterSidebar::handle_form_input`]
    /// additionally snaps it to the slider.
    pub fn from_form_value(name: &str, value: &str, checked: bool) -> DomainResult<Self> {
        match name {
            "price" => Ok(Self::PriceChanged(parse_number("price", value)?)),
            "category" => {
                if value.trim().is_empty() {
                    return Err(DomainError::validation("category value cannot be empty"));
                }
                Ok(Self::CategoryToggled {
                    value: value.to_string(),
                    checked,
                })
            }
            "rating" => Ok(Self::RatingSelected(parse_number("rating", value)?)),
            "sortByPrice" => Ok(Self::SortSelected(value.parse()?)),
            "clear" => Ok(Self::Cleared),
            other => Err(DomainError::validation(format!("unknown form control: {other}"))),
        }
    }
}

fn parse_number(field: &str, raw: &str) -> DomainResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| DomainError::validation(format!("{field}: {e}")))?;
    if !value.is_finite() {
        return Err(DomainError::validation(format!("{field} must be finite")));
    }
    Ok(value)
}

/// Host-side filter session.
pub struct FilterSidebar<S> {
    config: SidebarConfig,
    products: Vec<Product>,
    defaults: FilterCriteria,
    criteria: FilterCriteria,
    filtered: Vec<Product>,
    sink: S,
}

impl<S> core::fmt::Debug for FilterSidebar<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FilterSidebar")
            .field("products", &self.products.len())
            .field("criteria", &self.criteria)
            .field("filtered", &self.filtered.len())
            .finish_non_exhaustive()
    }
}

impl<S: FilterResultSink> FilterSidebar<S> {
    /// Mount with defaults derived from `products` and run the pipeline once.
    pub fn mount(products: Vec<Product>, config: SidebarConfig, sink: S) -> Self {
        let defaults = FilterCriteria::for_products(&products, &config);
        tracing::debug!(
            products = products.len(),
            price_ceiling = defaults.price_ceiling,
            "filter sidebar mounted"
        );

        let mut sidebar = Self {
            config,
            products,
            criteria: defaults.clone(),
            defaults,
            filtered: Vec::new(),
            sink,
        };
        sidebar.recompute();
        sidebar
    }

    /// Apply one event and recompute.
    pub fn dispatch(&mut self, event: SidebarEvent) {
        match event {
            SidebarEvent::PriceChanged(price) => self.criteria.price_ceiling = price,
            SidebarEvent::CategoryToggled { value, checked } => {
                self.criteria.categories = self.criteria.categories.toggle(&value, checked);
            }
            SidebarEvent::RatingSelected(rating) => self.criteria.min_rating = Some(rating),
            SidebarEvent::SortSelected(sort) => self.criteria.sort = sort,
            SidebarEvent::Cleared => self.criteria = self.defaults.clone(),
            SidebarEvent::ProductsReplaced(products) => self.products = products,
        }
        self.recompute();
    }

    /// Parse and apply a raw form change. Malformed values leave the
    /// criteria untouched and do not notify the sink.
    pub fn handle_form_input(
        &mut self,
        name: &str,
        value: &str,
        checked: bool,
    ) -> DomainResult<()> {
        let event = match SidebarEvent::from_form_value(name, value, checked) {
            Ok(SidebarEvent::PriceChanged(raw)) => {
                SidebarEvent::PriceChanged(self.price_slider().snap(raw))
            }
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(control = name, value, error = %err, "rejected form input");
                return Err(err);
            }
        };
        self.dispatch(event);
        Ok(())
    }

    /// Re-run the pipeline over the current products and criteria.
    pub fn recompute(&mut self) -> &[Product] {
        self.filtered = FilterEngine::apply(&self.products, &self.criteria);
        self.sink.on_filter_change(&self.filtered);
        &self.filtered
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Criteria restored by [`SidebarEvent::Cleared`].
    pub fn defaults(&self) -> &FilterCriteria {
        &self.defaults
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Result of the most recent pipeline run.
    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Slider bounds follow the current list; the value is the current ceiling.
    pub fn price_slider(&self) -> PriceSlider {
        PriceSlider {
            min: 0.0,
            max: max_price(&self.products).unwrap_or(self.config.fallback_price_ceiling),
            step: self.config.price_step,
            value: self.criteria.price_ceiling,
        }
    }

    pub fn category_checkboxes(&self) -> Vec<CategoryCheckbox> {
        controls::category_checkboxes(&self.criteria.categories)
    }

    pub fn rating_radios(&self) -> Vec<RatingRadio> {
        controls::rating_radios(self.criteria.min_rating)
    }

    pub fn sort_radios(&self) -> Vec<SortRadio> {
        controls::sort_radios(self.criteria.sort)
    }
}
