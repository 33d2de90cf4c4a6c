//! Per-object results of the matching passes

use std::fmt;

use serde::Serialize;

use crate::models::{BoundaryId, RegistryId};

/// Three-way answer to "which one?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
    /// More than one candidate, none preferred
    Ambiguous,
}

impl<T> Lookup<T> {
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound | Self::Ambiguous => None,
        }
    }
}

/// Why an object was left unmatched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoParentFound,
    AmbiguousParent,
    NoChildMatch,
    AmbiguousChildMatch,
    /// The live dataset's reference is multi-valued or not a number
    UnusableExistingReference,
    /// A resolved id has no entry in the registry
    UnknownRegistryId,
}

impl SkipReason {
    #[must_use]
    pub const fn class(self) -> OutcomeClass {
        match self {
            Self::AmbiguousParent | Self::AmbiguousChildMatch | Self::UnusableExistingReference => {
                OutcomeClass::Ambiguous
            }
            Self::NoParentFound | Self::NoChildMatch | Self::UnknownRegistryId => {
                OutcomeClass::Unmatched
            }
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoParentFound => "no parent found",
            Self::AmbiguousParent => "ambiguous parent",
            Self::NoChildMatch => "no child match",
            Self::AmbiguousChildMatch => "ambiguous child match",
            Self::UnusableExistingReference => "unusable existing reference",
            Self::UnknownRegistryId => "unknown registry id",
        })
    }
}

/// What happened to one object in its pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "reason")]
pub enum ObjectOutcome {
    Matched,
    /// Taken straight from a reference already in the live dataset
    MatchedFastPath,
    Skipped(SkipReason),
}

impl ObjectOutcome {
    #[must_use]
    pub const fn class(self) -> OutcomeClass {
        match self {
            Self::Matched | Self::MatchedFastPath => OutcomeClass::Matched,
            Self::Skipped(reason) => reason.class(),
        }
    }
}

/// Coarse grouping of outcomes, one log level each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeClass {
    Matched,
    Ambiguous,
    Unmatched,
}

impl OutcomeClass {
    #[must_use]
    pub const fn log_level(self) -> log::Level {
        match self {
            Self::Matched => log::Level::Info,
            Self::Ambiguous => log::Level::Warn,
            Self::Unmatched => log::Level::Error,
        }
    }
}

/// A registry id that more than one boundary matched to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateRegistryClaim {
    pub registry_id: RegistryId,
    pub claimants: Vec<BoundaryId>,
}
