//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. An
/// item's kind is one: two items with the same kind age by the same rules,
/// whatever else differs between them.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
