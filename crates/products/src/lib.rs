//! Product listing filters.
//!
//! This crate contains the product-filtering sidebar logic, implemented purely
//! as deterministic domain logic (no IO, no rendering, no storage):
//!
//! - [`product`]: the read-only product record and the discounted-price rule.
//! - [`criteria`]: filter criteria and their user-driven state transitions.
//! - [`engine`]: the filter/sort pipeline.
//! - [`sidebar`]: the session that owns criteria and re-runs the pipeline.
//! - [`controls`]: the form controls a host renders for the sidebar.

pub mod controls;
pub mod criteria;
pub mod engine;
pub mod product;
pub mod sidebar;

pub use controls::{CategoryCheckbox, PriceSlider, RatingRadio, SortRadio};
pub use criteria::{CategoryFilter, FilterCriteria, SortOrder, ALL_CATEGORIES};
pub use engine::FilterEngine;
pub use product::{discounted_price, max_price, Product};
pub use sidebar::{FilterResultSink, FilterSidebar, SidebarEvent};
