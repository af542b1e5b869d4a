use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::types::TypeId;

/// What the registry knows about one visited id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VisitRecord {
    /// Fully described under its own id.
    Concrete,
    /// A non-canonical id; the description lives under the target.
    Alias(TypeId),
}

impl VisitRecord {
    pub fn alias_target(self) -> Option<TypeId> {
        match self {
            VisitRecord::Concrete => None,
            VisitRecord::Alias(target) => Some(target),
        }
    }
}

/// Every id reached during a conversion, ordered by id.
///
/// Entries are written once and never updated or removed, so a second
/// encounter of any id short-circuits regardless of the path it came from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<TypeId, VisitRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: TypeId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: TypeId) -> Option<VisitRecord> {
        self.entries.get(&id).copied()
    }

    /// Record `id` as fully described. Returns false if it was already known.
    pub fn insert_concrete(&mut self, id: TypeId) -> bool {
        self.insert(id, VisitRecord::Concrete)
    }

    /// Record `id` as an alias of `target`. Returns false if `id` was
    /// already known.
    ///
    /// `target` must already be registered as concrete; aliases never chain.
    pub fn insert_alias(&mut self, id: TypeId, target: TypeId) -> bool {
        debug_assert_eq!(
            self.get(target),
            Some(VisitRecord::Concrete),
            "alias {id} must point at a concrete entry, not {target}"
        );
        self.insert(id, VisitRecord::Alias(target))
    }

    fn insert(&mut self, id: TypeId, record: VisitRecord) -> bool {
        match self.entries.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                tracing::trace!(%id, ?record, "registered");
                slot.insert(record);
                true
            }
        }
    }

    /// Entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, VisitRecord)> + '_ {
        self.entries.iter().map(|(id, record)| (*id, *record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn id(raw: u32) -> TypeId {
        TypeId::new(raw)
    }

    #[test]
    fn insert_is_idempotent() {
        let mut registry = Registry::new();
        assert!(registry.insert_concrete(id(3)));
        assert!(!registry.insert_concrete(id(3)));
        assert!(registry.insert_alias(id(7), id(3)));
        assert!(!registry.insert_alias(id(7), id(3)));
        // An id keeps whatever it was first registered as.
        assert!(!registry.insert_concrete(id(7)));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(id(7)), Some(VisitRecord::Alias(id(3))));
        assert_eq!(registry.get(id(3)), Some(VisitRecord::Concrete));
        assert_eq!(registry.get(id(4)), None);
    }

    #[test]
    fn iterates_in_ascending_id_order() {
        let mut registry = Registry::new();
        for raw in [40, 2, 17, 9] {
            registry.insert_concrete(id(raw));
        }
        registry.insert_alias(id(1), id(9));

        let order: Vec<_> = registry.iter().map(|(id, _)| id.raw()).collect();
        assert_eq!(order, vec![1, 2, 9, 17, 40]);
    }

    #[test]
    fn handles_sparse_large_id_spaces() {
        let mut registry = Registry::new();
        for raw in (0..50_000u32).rev().map(|n| n.wrapping_mul(2_654_435_761)) {
            registry.insert_concrete(id(raw));
        }
        assert_eq!(registry.len(), 50_000);

        let ids: Vec<_> = registry.iter().map(|(id, _)| id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    #[should_panic(expected = "must point at a concrete entry")]
    #[cfg(debug_assertions)]
    fn alias_of_unknown_target_is_rejected() {
        let mut registry = Registry::new();
        registry.insert_alias(id(2), id(1));
    }

    #[test]
    fn alias_target_accessor() {
        assert_eq!(VisitRecord::Concrete.alias_target(), None);
        assert_eq!(VisitRecord::Alias(id(5)).alias_target(), Some(id(5)));
    }
}
