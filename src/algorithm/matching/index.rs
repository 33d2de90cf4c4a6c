//! Containment and reference index over the extracts
//!
//! Built once per run. `parent_of` keeps every parent any row declares for
//! an object; the parent resolver treats more than one as ambiguous.

use log::{debug, info};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::models::{BoundaryId, BoundaryObject, Category, RegistryRef};
use crate::osm::OsmRelation;

/// Declared parents of one object at one level
pub type ParentCandidates = SmallVec<[BoundaryId; 1]>;

/// Lookup tables derived from the extracts and the live dataset
#[derive(Debug, Default)]
pub struct RegistryIndex {
    /// Keyed by the child's level
    parent_of: FxHashMap<Category, FxHashMap<BoundaryId, ParentCandidates>>,
    extract_refs: FxHashMap<BoundaryId, RegistryRef>,
    live_refs: FxHashMap<BoundaryId, RegistryRef>,
}

impl RegistryIndex {
    /// Index every row of every extract
    ///
    /// Each row contributes the (child, parent) pairs of its containment
    /// chain: county → barony → civil parish → the row itself, skipping any
    /// pair with a blank side.
    #[must_use]
    pub fn build<'a>(objects: impl IntoIterator<Item = &'a BoundaryObject>) -> Self {
        let mut index = Self::default();
        let mut rows = 0usize;

        for object in objects {
            rows += 1;
            for level in [Category::Barony, Category::CivilParish, Category::Townland] {
                let Some(parent_level) = level.parent() else {
                    continue;
                };
                if let (Some(child), Some(parent)) =
                    (object.id_at(level), object.id_at(parent_level))
                {
                    index.insert_parent(level, child.clone(), parent.clone());
                }
            }

            if let Some(reference) = &object.registry_ref {
                if let Some(previous) = index.extract_refs.get(&object.id) {
                    if previous != reference {
                        debug!(
                            "{} has conflicting extract references {previous:?} and {reference:?}, keeping the first",
                            object.id
                        );
                    }
                } else {
                    index.extract_refs.insert(object.id.clone(), reference.clone());
                }
            }
        }

        info!(
            "Indexed {rows} extract rows: {} with registry references, {} parent links",
            index.extract_refs.len(),
            index.parent_of.values().map(FxHashMap::len).sum::<usize>()
        );
        index
    }

    fn insert_parent(&mut self, level: Category, child: BoundaryId, parent: BoundaryId) {
        let candidates = self.parent_of.entry(level).or_default().entry(child).or_default();
        if !candidates.contains(&parent) {
            candidates.push(parent);
        }
    }

    /// Take registry references already tagged in the live dataset
    ///
    /// Returns how many relations carried one.
    pub fn absorb_live(&mut self, relations: &[OsmRelation], separator: char) -> usize {
        let mut absorbed = 0;
        for relation in relations {
            let (Some(id), Some(reference)) =
                (relation.boundary_id(), relation.registry_ref(separator))
            else {
                continue;
            };
            self.live_refs.insert(id, reference);
            absorbed += 1;
        }
        info!("Absorbed {absorbed} registry references from the live dataset");
        absorbed
    }

    /// Declared parents of `id`, which sits at `level`
    #[must_use]
    pub fn parents_of(&self, level: Category, id: &BoundaryId) -> &[BoundaryId] {
        self.parent_of
            .get(&level)
            .and_then(|children| children.get(id))
            .map_or(&[], SmallVec::as_slice)
    }

    /// Reference carried by the extract row
    #[must_use]
    pub fn extract_ref(&self, id: &BoundaryId) -> Option<&RegistryRef> {
        self.extract_refs.get(id)
    }

    /// Reference tagged on the live relation
    #[must_use]
    pub fn live_ref(&self, id: &BoundaryId) -> Option<&RegistryRef> {
        self.live_refs.get(id)
    }

    /// Known reference for `id`, the extract taking precedence over the live tag
    #[must_use]
    pub fn registry_ref_of(&self, id: &BoundaryId) -> Option<&RegistryRef> {
        self.extract_ref(id).or_else(|| self.live_ref(id))
    }
}
