//! Checks over registry tags already in the live dataset

use std::collections::{BTreeMap, BTreeSet};

use log::info;

use super::{OsmRelation, REGISTRY_REF_TAG};

/// A `logainm:ref` value carried by more than one relation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRef {
    /// Tag value exactly as written on the relations
    pub reference: String,
    pub relations: BTreeSet<i64>,
}

/// Every `logainm:ref` value shared by two or more relations, ordered by value
#[must_use]
pub fn duplicate_registry_refs(relations: &[OsmRelation]) -> Vec<DuplicateRef> {
    let mut by_ref: BTreeMap<&str, BTreeSet<i64>> = BTreeMap::new();
    for relation in relations {
        if let Some(reference) = relation.tag(REGISTRY_REF_TAG) {
            by_ref.entry(reference).or_default().insert(relation.id);
        }
    }

    by_ref
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(reference, relations)| DuplicateRef {
            reference: reference.to_string(),
            relations,
        })
        .collect()
}

/// Log each duplicate with links for manual review
pub fn report_duplicates(duplicates: &[DuplicateRef], registry_url: impl Fn(&str) -> String) {
    let mut affected = 0;
    for duplicate in duplicates {
        info!(
            "logainm:ref={} for these {} OSM relations: {}",
            duplicate.reference,
            duplicate.relations.len(),
            itertools::join(&duplicate.relations, ", ")
        );
        info!("View on logainm: {}", registry_url(&duplicate.reference));
        for id in &duplicate.relations {
            info!("View on OSM: https://www.openstreetmap.org/relation/{id}");
        }
        affected += duplicate.relations.len();
    }
    info!(
        "There are {} duplicate logainm:refs which affect {affected} OSM objects",
        duplicates.len()
    );
}
