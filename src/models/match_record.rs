//! Output of a matchup run

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{BoundaryId, RegistryId};

/// Registry attributes attached to one boundary object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub registry_id: RegistryId,
    pub name_en: String,
    pub name_ga: Option<String>,
    /// Registry permalink, preferred over a URL built from the id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placenamesni_link: Option<String>,
}

/// Matches keyed by boundary id, ordered by key
pub type MatchSet = BTreeMap<BoundaryId, MatchRecord>;
