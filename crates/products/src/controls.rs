//! Form controls rendered by the sidebar.
//!
//! Hosts render these views instead of hardcoding option lists; checked
//! states are derived from the current criteria.

use serde::Serialize;

use crate::criteria::{CategoryFilter, SortOrder, ALL_CATEGORIES};

/// `(value, label)` pairs for the category checkboxes, in display order.
pub const CATEGORY_OPTIONS: [(&str, &str); 4] = [
    (ALL_CATEGORIES, "All"),
    ("Men", "Men Clothing"),
    ("Women", "Women Clothing"),
    ("Kids", "Kids Clothing"),
];

/// Minimum-rating radio values, in display order.
pub const RATING_OPTIONS: [u8; 4] = [4, 3, 2, 1];

/// Sort radio values, in display order.
pub const SORT_OPTIONS: [SortOrder; 2] = [SortOrder::PriceLowToHigh, SortOrder::PriceHighToLow];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCheckbox {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingRadio {
    pub value: u8,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortRadio {
    pub value: SortOrder,
    pub label: &'static str,
    pub checked: bool,
}

/// Range input for the price ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

impl PriceSlider {
    /// Snap a raw position the way a range input does: round to the nearest
    /// step from `min`, then keep the result inside `[min, max]` without
    /// leaving the step grid.
    pub fn snap(&self, raw: f64) -> f64 {
        if !raw.is_finite() || self.step <= 0.0 || self.max <= self.min {
            return self.min;
        }

        let snapped = self.min + ((raw - self.min) / self.step).round() * self.step;
        if snapped < self.min {
            self.min
        } else if snapped > self.max {
            self.min + ((self.max - self.min) / self.step).floor() * self.step
        } else {
            snapped
        }
    }
}

pub fn category_checkboxes(selection: &CategoryFilter) -> Vec<CategoryCheckbox> {
    CATEGORY_OPTIONS
        .iter()
        .map(|&(value, label)| CategoryCheckbox {
            value,
            label,
            checked: selection.is_checked(value),
        })
        .collect()
}

pub fn rating_radios(min_rating: Option<f64>) -> Vec<RatingRadio> {
    RATING_OPTIONS
        .iter()
        .map(|&value| RatingRadio {
            value,
            label: format!("{value} stars & above"),
            checked: min_rating == Some(f64::from(value)),
        })
        .collect()
}

pub fn sort_radios(sort: SortOrder) -> Vec<SortRadio> {
    SORT_OPTIONS
        .iter()
        .map(|&value| SortRadio {
            value,
            label: sort_label(value),
            checked: sort == value,
        })
        .collect()
}

fn sort_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Unsorted => "Unsorted",
        SortOrder::PriceLowToHigh => "Price - Low to High",
        SortOrder::PriceHighToLow => "Price - High to Low",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(max: f64) -> PriceSlider {
        PriceSlider { min: 0.0, max, step: 5.0, value: max }
    }

    #[test]
    fn snap_rounds_to_nearest_step() {
        let s = slider(1000.0);
        assert_eq!(s.snap(12.0), 10.0);
        assert_eq!(s.snap(13.0), 15.0);
        assert_eq!(s.snap(500.0), 500.0);
    }

    #[test]
    fn snap_clamps_to_range() {
        let s = slider(1000.0);
        assert_eq!(s.snap(-40.0), 0.0);
        assert_eq!(s.snap(5000.0), 1000.0);
        assert_eq!(s.snap(f64::NAN), 0.0);
    }

    #[test]
    fn snap_stays_on_grid_when_max_is_off_grid() {
        let s = slider(103.0);
        assert_eq!(s.snap(103.0), 100.0);
        assert_eq!(s.snap(102.0), 100.0);
    }

    #[test]
    fn category_checkboxes_follow_selection() {
        let boxes = category_checkboxes(&CategoryFilter::only(["Women", "Kids"]));
        let checked: Vec<_> = boxes.iter().filter(|b| b.checked).map(|b| b.value).collect();
        assert_eq!(checked, vec!["Women", "Kids"]);
        assert_eq!(boxes[1].label, "Men Clothing");

        let boxes = category_checkboxes(&CategoryFilter::All);
        assert!(boxes[0].checked);
        assert!(boxes[1..].iter().all(|b| !b.checked));
    }

    #[test]
    fn rating_radios_label_and_check() {
        let radios = rating_radios(Some(3.0));
        assert_eq!(radios.len(), 4);
        assert_eq!(radios[0].label, "4 stars & above");
        assert!(radios[1].checked);
        assert!(rating_radios(None).iter().all(|r| !r.checked));
    }

    #[test]
    fn sort_radios_label_and_check() {
        let radios = sort_radios(SortOrder::PriceHighToLow);
        assert_eq!(radios[0].label, "Price - Low to High");
        assert!(!radios[0].checked);
        assert!(radios[1].checked);
        assert!(sort_radios(SortOrder::Unsorted).iter().all(|r| !r.checked));
    }
}
