//! Entity trait: identity + continuity across state changes.

use core::borrow::Borrow;

/// Entity marker + minimal interface.
///
/// An entity keeps its identity while its attributes change, the way a shop
/// item keeps its name while it ages.
pub trait Entity {
    /// Identifier type.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// First entity in `entities` whose identifier equals `id`.
///
/// Accepts any borrowed form of the identifier, so a `String` id can be
/// looked up with a `&str`.
pub fn find_by_id<'a, E, Q>(entities: impl IntoIterator<Item = &'a E>, id: &Q) -> Option<&'a E>
where
    E: Entity + 'a,
    E::Id: Borrow<Q>,
    Q: Eq + ?Sized,
{
    entities
        .into_iter()
        .find(|e| Borrow::<Q>::borrow(e.id()) == id)
}
