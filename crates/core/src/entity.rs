//! Entity trait: identity that survives state changes.
//!
//! Catalog products and cart lines are entities keyed by `ProductId`; the cart
//! relies on that identity to keep at most one line per product.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
