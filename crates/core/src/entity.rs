//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is identified by its key, not by the values of its other
/// fields; attributes may change while the key stays fixed.
pub trait Entity {
    /// Strongly-typed entity key.
    type Key: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity key.
    fn key(&self) -> &Self::Key;
}
