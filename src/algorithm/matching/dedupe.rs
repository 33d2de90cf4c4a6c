//! Final clean-up of the combined matches

use itertools::Itertools;
use log::{info, warn};

use super::outcome::DuplicateRegistryClaim;
use crate::models::MatchSet;

/// Drop every match whose registry id was claimed by more than one boundary
///
/// None of the claimants is kept, fast-path matches included. The dropped
/// claims are returned ordered by registry id.
#[must_use]
pub fn dedupe(mut matches: MatchSet) -> (MatchSet, Vec<DuplicateRegistryClaim>) {
    let conflicts: Vec<DuplicateRegistryClaim> = matches
        .iter()
        .map(|(boundary, record)| (record.registry_id, boundary.clone()))
        .into_group_map()
        .into_iter()
        .filter(|(_, claimants)| claimants.len() > 1)
        .map(|(registry_id, claimants)| DuplicateRegistryClaim {
            registry_id,
            claimants,
        })
        .sorted_by_key(|claim| claim.registry_id)
        .collect();

    for claim in &conflicts {
        warn!(
            "logainm {} matched by {} boundaries ({}), dropping all of them",
            claim.registry_id,
            claim.claimants.len(),
            claim.claimants.iter().join(", ")
        );
        for boundary in &claim.claimants {
            matches.remove(boundary);
        }
    }

    if !conflicts.is_empty() {
        info!(
            "Dropped {} contested registry ids, {} matches remain",
            conflicts.len(),
            matches.len()
        );
    }
    (matches, conflicts)
}

/// The first `n` matches in boundary id order
#[must_use]
pub fn limit(matches: MatchSet, n: usize) -> MatchSet {
    matches.into_iter().take(n).collect()
}
