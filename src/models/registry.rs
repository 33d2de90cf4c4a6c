//! Registry entries and references to them

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::match_record::MatchRecord;
use super::types::{Category, RegistryId};

/// One node of the registry's containment hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub id: RegistryId,
    /// Raw registry category code; codes outside the four matched levels are kept
    pub category_code: String,
    pub name_en: String,
    pub name_ga: Option<String>,
    pub permalink: Option<String>,
    /// Matching entry in the Northern Ireland placenames database
    pub placenamesni_link: Option<String>,
}

impl RegistryEntry {
    /// Hierarchy level of this entry, if it is one of the matched levels
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        Category::from_registry_code(&self.category_code)
    }

    #[must_use]
    pub fn is_category(&self, category: Category) -> bool {
        self.category_code == category.registry_code()
    }

    /// Attributes handed to the tag writer when this entry is matched
    #[must_use]
    pub fn to_match_record(&self) -> MatchRecord {
        MatchRecord {
            registry_id: self.id,
            name_en: self.name_en.clone(),
            name_ga: self.name_ga.clone(),
            permalink: self.permalink.clone(),
            placenamesni_link: self.placenamesni_link.clone(),
        }
    }
}

/// A registry reference as found in an extract column or a live tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryRef {
    /// Exactly one registry id
    Single(RegistryId),
    /// Reference containing the separator, a known data defect that is never
    /// split, even when only one id sits beside the separator
    Multiple(SmallVec<[RegistryId; 2]>),
    /// Not a number and not a list of numbers
    Unparseable(String),
}

impl RegistryRef {
    /// Parse a raw reference; blank values yield `None`
    #[must_use]
    pub fn parse(raw: &str, separator: char) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if raw.contains(separator) {
            let ids: Option<SmallVec<[RegistryId; 2]>> = raw
                .split(separator)
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| part.parse().ok())
                .collect();
            // a separator never yields a usable reference, even with one id
            return Some(match ids {
                Some(ids) if !ids.is_empty() => Self::Multiple(ids),
                _ => Self::Unparseable(raw.to_string()),
            });
        }

        Some(match raw.parse() {
            Ok(id) => Self::Single(id),
            Err(_) => Self::Unparseable(raw.to_string()),
        })
    }

    /// The referenced id, when the reference is unambiguous
    #[must_use]
    pub fn single(&self) -> Option<RegistryId> {
        match self {
            Self::Single(id) => Some(*id),
            _ => None,
        }
    }
}
