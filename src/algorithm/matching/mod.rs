//! Matching boundary objects to registry entries
//!
//! The pieces, in the order a run uses them:
//!
//! 1. [`RegistryIndex`] over the extracts and the live dataset
//! 2. One [`Matchup::match_category`] pass per level, outermost first,
//!    each built on the parent resolver and the child matcher
//! 3. [`dedupe`] and [`limit`] over the combined matches

pub mod child;
pub mod dedupe;
pub mod index;
pub mod normalizer;
pub mod orchestrator;
pub mod outcome;
pub mod parent;
pub mod resolved;

pub use child::{find_child, find_county};
pub use dedupe::{dedupe, limit};
pub use index::RegistryIndex;
pub use normalizer::variants;
pub use orchestrator::{CategoryMatchup, Matchup, OutcomeMap};
pub use outcome::{DuplicateRegistryClaim, Lookup, ObjectOutcome, OutcomeClass, SkipReason};
pub use parent::resolve_parent;
pub use resolved::ResolvedRefs;
