//! Reconciliation of the Logainm placename registry with OpenStreetMap
//! administrative boundaries.
//!
//! Boundaries come from per-level CSV extracts of the mapping dataset and
//! from an OSM XML file of the live relations. Each boundary without a
//! registry reference is matched, level by level from counties down to
//! townlands, to the registry entry that has the same name under the
//! boundary's already-matched parent.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod osm;
pub mod registry;
pub mod utils;

// Core types
pub use config::MatchupConfig;
pub use error::{MatchupError, Result};
pub use models::{
    BoundaryId, BoundaryObject, Category, MatchRecord, MatchSet, RegistryEntry, RegistryId,
    RegistryRef,
};

// Matching
pub use algorithm::matching::{
    Lookup, Matchup, ObjectOutcome, OutcomeClass, RegistryIndex, ResolvedRefs, SkipReason, dedupe,
    limit,
};
pub use algorithm::{MatchupInputs, MatchupReport, run_matchup};

// Inputs and outputs
pub use loader::ExtractSet;
pub use osm::{OsmRelation, load_relations};
pub use registry::{InMemoryRegistry, RegistryStore};
