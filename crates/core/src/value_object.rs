//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and defined entirely by their attribute
/// values; two with the same values are equal. To "modify" one, construct a
/// new one. Contrast with [`crate::Entity`], where identity is carried by
/// the key.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
