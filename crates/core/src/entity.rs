//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Repositories key their records by `Entity::id`, so two states of the same
/// product (before and after an alteration) share one identity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
