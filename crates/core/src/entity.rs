//! Entity trait: identity + continuity across re-fetches.

/// Entity marker + minimal interface.
///
/// Controllers use the identifier to locate rows in a freshly fetched
/// collection (selection, dismissal) without relying on positions.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
