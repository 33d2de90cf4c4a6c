//! One matching pass over the objects of a single category
//!
//! For each object without a registry reference in its extract row:
//!
//! 1. A reference already tagged in the live dataset is taken as is
//!    (the fast path), once the registry confirms the id exists.
//! 2. Otherwise the parent's registry id is resolved and the object's name
//!    is looked up among that parent's registry children. Counties have no
//!    parent and are looked up by name alone.
//!
//! Every object ends the pass with exactly one [`ObjectOutcome`]. Matched ids
//! are added to the [`ResolvedRefs`] accumulator so the next pass can anchor
//! on them.

use std::collections::BTreeMap;

use itertools::Itertools;
use log::{debug, info, log};

use super::child::{find_child, find_county};
use super::index::RegistryIndex;
use super::outcome::{Lookup, ObjectOutcome, OutcomeClass, SkipReason};
use super::parent::resolve_parent;
use super::resolved::ResolvedRefs;
use crate::models::{
    BoundaryId, BoundaryObject, Category, MatchRecord, MatchSet, RegistryId, RegistryRef,
};
use crate::registry::RegistryStore;
use crate::utils::logging::progress::pass_progress_bar;

/// Outcome of every object in one pass
pub type OutcomeMap = BTreeMap<BoundaryId, ObjectOutcome>;

/// Result of one pass
#[derive(Debug, Clone, Default)]
pub struct CategoryMatchup {
    pub matches: MatchSet,
    pub outcomes: OutcomeMap,
    /// The accumulator handed in, plus everything this pass matched
    pub resolved: ResolvedRefs,
}

impl CategoryMatchup {
    /// Objects per outcome class
    #[must_use]
    pub fn class_counts(&self) -> BTreeMap<OutcomeClass, usize> {
        self.outcomes
            .values()
            .map(|outcome| outcome.class())
            .counts()
            .into_iter()
            .collect()
    }
}

/// Everything a pass reads
#[derive(Clone, Copy)]
pub struct Matchup<'a> {
    index: &'a RegistryIndex,
    store: &'a dyn RegistryStore,
    show_progress: bool,
}

impl<'a> Matchup<'a> {
    #[must_use]
    pub fn new(index: &'a RegistryIndex, store: &'a dyn RegistryStore) -> Self {
        Self {
            index,
            store,
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Match every object of `category` in `objects`
    ///
    /// Objects of other categories, and objects whose extract row already
    /// carries a reference, are passed over without an outcome.
    #[must_use]
    pub fn match_category(
        &self,
        category: Category,
        objects: &[BoundaryObject],
        resolved: ResolvedRefs,
    ) -> CategoryMatchup {
        let mut pass = CategoryMatchup {
            resolved,
            ..CategoryMatchup::default()
        };

        let (todo, referenced): (Vec<&BoundaryObject>, Vec<&BoundaryObject>) = objects
            .iter()
            .filter(|object| object.category == category)
            .partition(|object| self.index.extract_ref(&object.id).is_none());
        info!(
            "Matching {} {category} objects without a registry reference ({} already referenced)",
            todo.len(),
            referenced.len()
        );

        let progress = pass_progress_bar(todo.len(), category, self.show_progress);
        for object in todo {
            progress.inc(1);
            if pass.outcomes.contains_key(&object.id) {
                debug!("{category} {} appears more than once, using its first row", object.id);
                continue;
            }

            let outcome = match self.match_object(object, &pass.resolved) {
                Ok((record, outcome)) => {
                    log!(
                        OutcomeClass::Matched.log_level(),
                        "{category} {} ({}) matched logainm {} ({})",
                        object.id,
                        object.name_en,
                        record.registry_id,
                        record.name_en
                    );
                    pass.resolved.insert(object.id.clone(), record.registry_id);
                    pass.matches.insert(object.id.clone(), record);
                    outcome
                }
                Err(reason) => {
                    log!(
                        reason.class().log_level(),
                        "{category} {} ({}) not matched: {reason}",
                        object.id,
                        object.name_en
                    );
                    ObjectOutcome::Skipped(reason)
                }
            };
            pass.outcomes.insert(object.id.clone(), outcome);
        }
        progress.finish_and_clear();

        let counts = pass.class_counts();
        info!(
            "{category}: {} matched, {} ambiguous, {} unmatched",
            counts.get(&OutcomeClass::Matched).unwrap_or(&0),
            counts.get(&OutcomeClass::Ambiguous).unwrap_or(&0),
            counts.get(&OutcomeClass::Unmatched).unwrap_or(&0)
        );
        pass
    }

    fn match_object(
        &self,
        object: &BoundaryObject,
        resolved: &ResolvedRefs,
    ) -> Result<(MatchRecord, ObjectOutcome), SkipReason> {
        if let Some(reference) = self.index.live_ref(&object.id) {
            let RegistryRef::Single(id) = reference else {
                debug!("{} is tagged with {reference:?}", object.id);
                return Err(SkipReason::UnusableExistingReference);
            };
            return self.record(*id).map(|record| (record, ObjectOutcome::MatchedFastPath));
        }

        let child = match object.category.parent() {
            None => find_county(self.store, &object.name_en),
            Some(parent_category) => {
                let parent = match resolve_parent(
                    self.index,
                    &object.id,
                    object.category,
                    resolved,
                ) {
                    Lookup::Found(parent) => parent,
                    Lookup::NotFound => return Err(SkipReason::NoParentFound),
                    Lookup::Ambiguous => return Err(SkipReason::AmbiguousParent),
                };
                find_child(self.store, parent, parent_category, object.category, &object.name_en)
            }
        };

        match child {
            Lookup::Found(id) => self.record(id).map(|record| (record, ObjectOutcome::Matched)),
            Lookup::NotFound => Err(SkipReason::NoChildMatch),
            Lookup::Ambiguous => Err(SkipReason::AmbiguousChildMatch),
        }
    }

    fn record(&self, id: RegistryId) -> Result<MatchRecord, SkipReason> {
        self.store
            .entry(id)
            .map(|entry| entry.to_match_record())
            .ok_or(SkipReason::UnknownRegistryId)
    }
}
