//! Entity trait: identity that survives state changes.

/// An object defined by its identifier rather than by its attribute values.
///
/// Two entities with equal ids are the same entity even when their other
/// fields differ (e.g. before and after a rename).
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
