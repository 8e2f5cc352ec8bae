//! Value object trait: equality by value, not identity.
//!
//! Filter criteria, category selections and sort orders have **no identity**.
//! Two selections with the same values are the same selection.

/// Marker trait for value objects.
///
/// Value objects are compared by their attribute values and replaced rather
/// than mutated in place when their meaning changes. The criteria state
/// machine relies on this: each user event produces a new value, which makes
/// "did anything change?" a plain equality check.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct PriceCeiling(f64);
///
/// impl ValueObject for PriceCeiling {}
///
/// assert_eq!(PriceCeiling(30.0), PriceCeiling(30.0));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
