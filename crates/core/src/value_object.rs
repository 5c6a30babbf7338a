//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: product specs and
/// requirement sets are never mutated after construction, so they can be shared
/// freely between concurrent analyses.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct ProductSpec {
///     viscosity: f64,
///     salt_spray_hours: f64,
/// }
///
/// impl ValueObject for ProductSpec {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
