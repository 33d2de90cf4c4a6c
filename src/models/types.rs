//! Common domain type definitions
//!
//! Identifier newtypes and the hierarchy category enum shared by the
//! extracts, the registry and the matching passes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MatchupError;

/// Administrative level in the county → barony → civil parish → townland hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// County (`CON` in the registry)
    County,
    /// Barony (`BAR`)
    Barony,
    /// Civil parish (`PAR`)
    CivilParish,
    /// Townland (`BF`)
    Townland,
}

impl Category {
    /// All categories, outermost first
    pub const HIERARCHY: [Self; 4] =
        [Self::County, Self::Barony, Self::CivilParish, Self::Townland];

    /// Category code used by the registry for this level
    #[must_use]
    pub const fn registry_code(self) -> &'static str {
        match self {
            Self::County => "CON",
            Self::Barony => "BAR",
            Self::CivilParish => "PAR",
            Self::Townland => "BF",
        }
    }

    /// Map a registry category code back onto a hierarchy level
    #[must_use]
    pub fn from_registry_code(code: &str) -> Option<Self> {
        match code.trim() {
            "CON" => Some(Self::County),
            "BAR" => Some(Self::Barony),
            "PAR" => Some(Self::CivilParish),
            "BF" => Some(Self::Townland),
            _ => None,
        }
    }

    /// The level directly containing this one
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::County => None,
            Self::Barony => Some(Self::County),
            Self::CivilParish => Some(Self::Barony),
            Self::Townland => Some(Self::CivilParish),
        }
    }

    /// Name used in logs, config files and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::County => "county",
            Self::Barony => "barony",
            Self::CivilParish => "civil_parish",
            Self::Townland => "townland",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = MatchupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "county" | "counties" => Ok(Self::County),
            "barony" | "baronies" => Ok(Self::Barony),
            "civil_parish" | "civil_parishes" | "parish" => Ok(Self::CivilParish),
            "townland" | "townlands" => Ok(Self::Townland),
            other => Self::from_registry_code(&other.to_uppercase())
                .ok_or_else(|| MatchupError::UnknownCategory(s.to_string())),
        }
    }
}

/// Kind of OSM element an extract identifier refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsmElement {
    /// Relation, written with a leading `-` in the extracts
    Relation(u64),
    /// Closed way, written as a bare number
    Way(u64),
}

/// Identifier of a boundary object as it appears in the extracts
///
/// The raw string is kept so that ordering and output keys match the
/// extract files exactly. A leading `-` marks a relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryId(String);

impl BoundaryId {
    /// Wrap a raw extract value; blank values are not identifiers
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    /// Extract key for an OSM relation id
    #[must_use]
    pub fn from_relation(id: u64) -> Self {
        Self(format!("-{id}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the OSM element behind this key, if it is numeric
    #[must_use]
    pub fn element(&self) -> Option<OsmElement> {
        match self.0.strip_prefix('-') {
            Some(rest) => rest.parse().ok().map(OsmElement::Relation),
            None => self.0.parse().ok().map(OsmElement::Way),
        }
    }

    /// OSM relation id, if this key denotes a relation
    #[must_use]
    pub fn relation_id(&self) -> Option<u64> {
        match self.element() {
            Some(OsmElement::Relation(id)) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for BoundaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Numeric registry identifier, stable across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryId(pub u64);

impl fmt::Display for RegistryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RegistryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
