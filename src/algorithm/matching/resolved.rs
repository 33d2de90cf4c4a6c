//! References learned during the run

use rustc_hash::FxHashMap;

use crate::models::{BoundaryId, RegistryId};

/// Boundary → registry id pairs settled by earlier passes
///
/// Each pass takes the accumulator from the one before, adds what it
/// resolves, and hands it back, so a barony matched this run can anchor the
/// parishes below it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedRefs {
    refs: FxHashMap<BoundaryId, RegistryId>,
}

impl ResolvedRefs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, boundary: BoundaryId, registry_id: RegistryId) {
        self.refs.insert(boundary, registry_id);
    }

    #[must_use]
    pub fn get(&self, boundary: &BoundaryId) -> Option<RegistryId> {
        self.refs.get(boundary).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

impl FromIterator<(BoundaryId, RegistryId)> for ResolvedRefs {
    fn from_iter<I: IntoIterator<Item = (BoundaryId, RegistryId)>>(iter: I) -> Self {
        Self {
            refs: iter.into_iter().collect(),
        }
    }
}
