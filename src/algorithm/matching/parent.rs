//! Registry id of an object's parent

use log::debug;

use super::index::RegistryIndex;
use super::outcome::Lookup;
use super::resolved::ResolvedRefs;
use crate::models::{BoundaryId, Category, RegistryId, RegistryRef};

/// Registry id of the single declared parent of `boundary`, which sits at `level`
///
/// The parent's reference is looked up in the extract, then the live
/// dataset, then `resolved`. A parent whose reference names several ids,
/// or is not a number at all, cannot anchor a child and counts as
/// ambiguous.
#[must_use]
pub fn resolve_parent(
    index: &RegistryIndex,
    boundary: &BoundaryId,
    level: Category,
    resolved: &ResolvedRefs,
) -> Lookup<RegistryId> {
    let parent = match index.parents_of(level, boundary) {
        [] => {
            debug!("{boundary}: no parent in the extract");
            return Lookup::NotFound;
        }
        [parent] => parent,
        candidates => {
            debug!("{boundary}: conflicting parents {candidates:?}");
            return Lookup::Ambiguous;
        }
    };

    match index.registry_ref_of(parent) {
        Some(RegistryRef::Single(id)) => Lookup::Found(*id),
        Some(reference @ (RegistryRef::Multiple(_) | RegistryRef::Unparseable(_))) => {
            debug!("{boundary}: parent {parent} has unusable reference {reference:?}");
            Lookup::Ambiguous
        }
        None => resolved.get(parent).map_or_else(
            || {
                debug!("{boundary}: parent {parent} has no registry reference");
                Lookup::NotFound
            },
            Lookup::Found,
        ),
    }
}
