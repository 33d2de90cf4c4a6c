//! A full matchup run
//!
//! Loading, then one pass per configured level in hierarchy order with the
//! accumulator threaded from each pass to the next, then dedupe and the
//! optional limit.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use super::matching::{
    DuplicateRegistryClaim, Matchup, OutcomeClass, OutcomeMap, RegistryIndex, ResolvedRefs, dedupe,
    limit,
};
use crate::config::MatchupConfig;
use crate::error::Result;
use crate::loader::ExtractSet;
use crate::models::{Category, MatchSet};
use crate::osm::{OsmRelation, load_relations};
use crate::registry::{InMemoryRegistry, RegistryStore};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Everything a run reads, loaded and indexed
#[derive(Debug)]
pub struct MatchupInputs {
    pub extracts: ExtractSet,
    pub index: RegistryIndex,
    pub registry: InMemoryRegistry,
    /// Relations of the live dataset, empty when none was given
    pub relations: Vec<OsmRelation>,
}

impl MatchupInputs {
    /// Load the extracts and registry named by `config`, plus the live
    /// dataset at `osm` when given
    pub fn load(config: &MatchupConfig, osm: Option<&Path>) -> Result<Self> {
        let start = Instant::now();
        log_operation_start("Loading extracts from", &config.extract_dir);
        let extracts = ExtractSet::load(config)?;
        log_operation_complete("loading extracts", extracts.len(), Some(start.elapsed()));

        let registry = InMemoryRegistry::load(&config.registry_names, &config.registry_contains)?;
        let relations = match osm {
            Some(path) => load_relations(path)?,
            None => Vec::new(),
        };

        Ok(Self::from_parts(config, extracts, registry, relations))
    }

    /// Index already-loaded inputs
    #[must_use]
    pub fn from_parts(
        config: &MatchupConfig,
        extracts: ExtractSet,
        registry: InMemoryRegistry,
        relations: Vec<OsmRelation>,
    ) -> Self {
        let mut index = RegistryIndex::build(extracts.iter());
        index.absorb_live(&relations, config.multi_ref_separator);
        Self {
            extracts,
            index,
            registry,
            relations,
        }
    }

    /// Run every configured pass over these inputs
    pub fn run(&self, config: &MatchupConfig) -> Result<MatchupReport> {
        run_matchup(config, &self.extracts, &self.index, &self.registry)
    }
}

/// Outcome of a whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchupReport {
    /// Final matches after dedupe and limit
    pub matches: MatchSet,
    pub outcomes: BTreeMap<Category, OutcomeMap>,
    pub conflicts: Vec<DuplicateRegistryClaim>,
}

impl MatchupReport {
    /// Objects per outcome class across every pass
    #[must_use]
    pub fn class_counts(&self) -> BTreeMap<OutcomeClass, usize> {
        let mut counts = BTreeMap::new();
        for outcome in self.outcomes.values().flat_map(BTreeMap::values) {
            *counts.entry(outcome.class()).or_insert(0) += 1;
        }
        counts
    }
}

/// Match every level in `config.categories`, outermost first
///
/// Each pass receives the references resolved by the passes before it, so
/// a config whose levels are out of order is rejected before any pass runs.
pub fn run_matchup(
    config: &MatchupConfig,
    extracts: &ExtractSet,
    index: &RegistryIndex,
    store: &dyn RegistryStore,
) -> Result<MatchupReport> {
    config.validate()?;
    let start = Instant::now();
    let matchup = Matchup::new(index, store).with_progress(config.show_progress);

    let mut report = MatchupReport::default();
    let mut combined = MatchSet::new();
    let mut resolved = ResolvedRefs::new();

    for &category in &config.categories {
        let pass = matchup.match_category(category, extracts.objects(category), resolved);
        resolved = pass.resolved;
        combined.extend(pass.matches);
        report.outcomes.insert(category, pass.outcomes);
    }

    let (deduped, conflicts) = dedupe(combined);
    report.conflicts = conflicts;
    report.matches = match config.limit {
        Some(n) => limit(deduped, n),
        None => deduped,
    };

    log_operation_complete("matchup", report.matches.len(), Some(start.elapsed()));
    Ok(report)
}
