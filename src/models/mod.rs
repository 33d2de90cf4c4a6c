//! Domain models for the matchup
//!
//! Boundary objects come from the mapping dataset's extracts, registry
//! entries from the placename registry, and match records pair the two.

pub mod boundary;
pub mod match_record;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use boundary::{BoundaryObject, ParentColumns};
pub use match_record::{MatchRecord, MatchSet};
pub use registry::{RegistryEntry, RegistryRef};
pub use types::{BoundaryId, Category, OsmElement, RegistryId};
