//! Filter criteria and the transitions user input drives through them.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, SidebarConfig, ValueObject};

use crate::product::{max_price, Product};

/// Form value of the "no category restriction" checkbox.
pub const ALL_CATEGORIES: &str = "All";

/// Which categories pass the category filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "categories", rename_all = "lowercase")]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    All,
    /// Only the listed categories. An empty set matches nothing.
    Only(BTreeSet<String>),
}

impl ValueObject for CategoryFilter {}

impl CategoryFilter {
    pub fn only<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(labels.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.contains(category),
        }
    }

    /// Whether the checkbox carrying `value` is shown as checked.
    pub fn is_checked(&self, value: &str) -> bool {
        match self {
            Self::All => value == ALL_CATEGORIES,
            Self::Only(set) => set.contains(value),
        }
    }

    /// Next state after a checkbox toggle.
    ///
    /// Checking "All" clears every specific label; checking a label while
    /// "All" is active replaces it; unchecking anything never leaves "All"
    /// active.
    pub fn toggle(&self, value: &str, checked: bool) -> Self {
        if value == ALL_CATEGORIES {
            return if checked {
                Self::All
            } else {
                Self::Only(BTreeSet::new())
            };
        }

        match (self, checked) {
            (Self::All, true) => Self::only([value]),
            (Self::Only(set), true) => {
                let mut set = set.clone();
                set.insert(value.to_string());
                Self::Only(set)
            }
            (Self::All, false) => Self::Only(BTreeSet::new()),
            (Self::Only(set), false) => {
                let mut set = set.clone();
                set.remove(value);
                Self::Only(set)
            }
        }
    }
}

/// Ordering applied by the sort stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "unsorted")]
    Unsorted,
    /// Ascending by discounted price.
    #[serde(rename = "lowToHigh")]
    PriceLowToHigh,
    /// Descending by discounted price.
    #[serde(rename = "highToLow")]
    PriceHighToLow,
}

impl ValueObject for SortOrder {}

impl SortOrder {
    /// Form value of the sort radio button.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unsorted => "unsorted",
            Self::PriceLowToHigh => "lowToHigh",
            Self::PriceHighToLow => "highToLow",
        }
    }
}

impl core::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unsorted" | "" => Ok(Self::Unsorted),
            "lowToHigh" => Ok(Self::PriceLowToHigh),
            "highToLow" => Ok(Self::PriceHighToLow),
            other => Err(DomainError::validation(format!("unknown sort order: {other}"))),
        }
    }
}

/// The full filter/sort selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Upper bound on discounted price (inclusive).
    pub price_ceiling: f64,
    pub categories: CategoryFilter,
    /// Minimum rating (inclusive); `None` disables the rating filter.
    pub min_rating: Option<f64>,
    pub sort: SortOrder,
}

impl ValueObject for FilterCriteria {}

impl FilterCriteria {
    /// Defaults for a list whose highest price is `max_price`.
    pub fn initial(max_price: f64) -> Self {
        Self {
            price_ceiling: max_price,
            categories: CategoryFilter::All,
            min_rating: None,
            sort: SortOrder::Unsorted,
        }
    }

    /// Defaults derived from a product list, falling back to the configured
    /// ceiling when the list is empty.
    pub fn for_products(products: &[Product], config: &SidebarConfig) -> Self {
        Self::initial(max_price(products).unwrap_or(config.fallback_price_ceiling))
    }

    pub fn with_price_ceiling(mut self, price_ceiling: f64) -> Self {
        self.price_ceiling = price_ceiling;
        self
    }

    pub fn with_categories(mut self, categories: CategoryFilter) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_min_rating(mut self, min_rating: Option<f64>) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checking_a_label_from_all_drops_all() {
        let next = CategoryFilter::All.toggle("Men", true);
        assert_eq!(next, CategoryFilter::only(["Men"]));
    }

    #[test]
    fn unchecking_a_label_keeps_the_rest() {
        let next = CategoryFilter::only(["Men", "Women"]).toggle("Men", false);
        assert_eq!(next, CategoryFilter::only(["Women"]));
    }

    #[test]
    fn checking_a_label_extends_the_set() {
        let next = CategoryFilter::only(["Men"]).toggle("Kids", true);
        assert_eq!(next, CategoryFilter::only(["Kids", "Men"]));
    }

    #[test]
    fn checking_all_resets_from_any_state() {
        let some = CategoryFilter::only(["Men", "Kids"]);
        assert_eq!(some.toggle(ALL_CATEGORIES, true), CategoryFilter::All);

        let none = CategoryFilter::only(Vec::<String>::new());
        assert_eq!(none.toggle(ALL_CATEGORIES, true), CategoryFilter::All);

        assert_eq!(CategoryFilter::All.toggle(ALL_CATEGORIES, true), CategoryFilter::All);
    }

    #[test]
    fn unchecking_all_matches_nothing() {
        let next = CategoryFilter::All.toggle(ALL_CATEGORIES, false);
        assert_eq!(next, CategoryFilter::Only(BTreeSet::new()));
        assert!(!next.matches("Men"));
        assert!(!next.matches("All"));

        let next = CategoryFilter::only(["Women"]).toggle(ALL_CATEGORIES, false);
        assert_eq!(next, CategoryFilter::Only(BTreeSet::new()));
    }

    #[test]
    fn unchecking_a_label_while_all_is_active_matches_nothing() {
        let next = CategoryFilter::All.toggle("Men", false);
        assert_eq!(next, CategoryFilter::Only(BTreeSet::new()));
    }

    #[test]
    fn checked_state_mirrors_selection() {
        assert!(CategoryFilter::All.is_checked(ALL_CATEGORIES));
        assert!(!CategoryFilter::All.is_checked("Men"));

        let only = CategoryFilter::only(["Kids"]);
        assert!(only.is_checked("Kids"));
        assert!(!only.is_checked(ALL_CATEGORIES));
    }

    #[test]
    fn sort_order_parses_form_values() {
        assert_eq!("lowToHigh".parse::<SortOrder>().unwrap(), SortOrder::PriceLowToHigh);
        assert_eq!("highToLow".parse::<SortOrder>().unwrap(), SortOrder::PriceHighToLow);
        assert_eq!("".parse::<SortOrder>().unwrap(), SortOrder::Unsorted);
        assert!(matches!("sideways".parse::<SortOrder>(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn sort_order_serializes_as_form_value() {
        let json = serde_json::to_string(&SortOrder::PriceHighToLow).unwrap();
        assert_eq!(json, "\"highToLow\"");
        assert_eq!(SortOrder::PriceLowToHigh.to_string(), "lowToHigh");
    }

    #[test]
    fn initial_criteria_have_no_restrictions() {
        let criteria = FilterCriteria::initial(450.0);
        assert_eq!(criteria.price_ceiling, 450.0);
        assert_eq!(criteria.categories, CategoryFilter::All);
        assert_eq!(criteria.min_rating, None);
        assert_eq!(criteria.sort, SortOrder::Unsorted);
    }

    #[test]
    fn defaults_fall_back_for_empty_list() {
        let criteria = FilterCriteria::for_products(&[], &SidebarConfig::default());
        assert_eq!(criteria.price_ceiling, 2000.0);

        let products = vec![Product::new(75.0, 10.0, "Men", 3.0)];
        let criteria = FilterCriteria::for_products(&products, &SidebarConfig::default());
        assert_eq!(criteria.price_ceiling, 75.0);
    }
}
