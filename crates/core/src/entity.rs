//! Entity trait: records that are told apart by id, not by content.

/// Entity marker + minimal interface.
///
/// Two products with the same title and price are still different products;
/// anything keyed by product (favorites, detail lookups) goes through `id()`.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
