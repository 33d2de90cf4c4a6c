//! CSV-backed in-memory registry store
//!
//! The registry is exported as two tables: `names.csv` with one row per
//! entry and `geometric_contains.csv` with one row per containment edge.
//! Both are read once and indexed for the lookups the passes make.

use std::collections::BTreeSet;
use std::io::{self, BufReader};
use std::path::Path;

use log::{info, warn};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::RegistryStore;
use crate::error::util::safe_open_file;
use crate::error::{MatchupError, Result};
use crate::models::{Category, RegistryEntry, RegistryId};

#[derive(Debug, Deserialize)]
struct NameRow {
    logainm_id: u64,
    #[serde(default)]
    logainm_category_code: String,
    #[serde(default)]
    logainm_permalink: String,
    #[serde(default)]
    placenamesni_link: String,
    #[serde(default)]
    name_en: String,
    #[serde(default)]
    name_ga: String,
}

#[derive(Debug, Deserialize)]
struct ContainsRow {
    outer_obj_id: u64,
    inner_obj_id: u64,
}

fn non_blank(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Registry held entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    entries: FxHashMap<RegistryId, RegistryEntry>,
    /// outer → inner edges; a set, so repeated edges collapse
    children: FxHashMap<RegistryId, BTreeSet<RegistryId>>,
    /// inner → outer edges
    parents: FxHashMap<RegistryId, BTreeSet<RegistryId>>,
    /// (category code, English name) → ids, for levels matched without a parent
    by_name: FxHashMap<(String, String), BTreeSet<RegistryId>>,
}

impl InMemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-typed entries and (outer, inner) edges
    #[must_use]
    pub fn from_parts(
        entries: impl IntoIterator<Item = RegistryEntry>,
        edges: impl IntoIterator<Item = (RegistryId, RegistryId)>,
    ) -> Self {
        let mut registry = Self::new();
        for entry in entries {
            registry.insert_entry(entry);
        }
        for (outer, inner) in edges {
            registry.insert_edge(outer, inner);
        }
        registry
    }

    /// Load `names.csv` and `geometric_contains.csv`
    pub fn load(names_path: &Path, contains_path: &Path) -> Result<Self> {
        let mut registry = Self::new();

        let names = safe_open_file(names_path, "registry names")?;
        registry
            .read_names(BufReader::new(names))
            .map_err(|e| MatchupError::csv(names_path, e))?;

        let contains = safe_open_file(contains_path, "registry containment")?;
        let edges = registry
            .read_contains(BufReader::new(contains))
            .map_err(|e| MatchupError::csv(contains_path, e))?;

        info!(
            "Loaded {} registry entries and {edges} containment edges",
            registry.len()
        );
        Ok(registry)
    }

    /// Add entries from a names table; returns how many rows were read
    pub fn read_names<R: io::Read>(&mut self, reader: R) -> csv::Result<usize> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut count = 0;
        for row in rdr.deserialize() {
            let row: NameRow = row?;
            self.insert_entry(RegistryEntry {
                id: RegistryId(row.logainm_id),
                category_code: row.logainm_category_code.trim().to_string(),
                name_en: row.name_en.trim().to_string(),
                name_ga: non_blank(row.name_ga),
                permalink: non_blank(row.logainm_permalink),
                placenamesni_link: non_blank(row.placenamesni_link),
            });
            count += 1;
        }
        Ok(count)
    }

    /// Add edges from a containment table; returns how many rows were read
    pub fn read_contains<R: io::Read>(&mut self, reader: R) -> csv::Result<usize> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut count = 0;
        for row in rdr.deserialize() {
            let row: ContainsRow = row?;
            self.insert_edge(RegistryId(row.outer_obj_id), RegistryId(row.inner_obj_id));
            count += 1;
        }
        Ok(count)
    }

    pub fn insert_entry(&mut self, entry: RegistryEntry) {
        let id = entry.id;
        let key = (entry.category_code.clone(), entry.name_en.clone());
        if let Some(previous) = self.entries.insert(id, entry) {
            warn!("Registry id {id} listed twice, keeping the later row");
            if let Some(ids) = self.by_name.get_mut(&(previous.category_code, previous.name_en)) {
                ids.remove(&id);
            }
        }
        self.by_name.entry(key).or_default().insert(id);
    }

    pub fn insert_edge(&mut self, outer: RegistryId, inner: RegistryId) {
        self.children.entry(outer).or_default().insert(inner);
        self.parents.entry(inner).or_default().insert(outer);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RegistryStore for InMemoryRegistry {
    fn entry(&self, id: RegistryId) -> Option<RegistryEntry> {
        self.entries.get(&id).cloned()
    }

    fn children_named(
        &self,
        parent: RegistryId,
        parent_category: Category,
        child_category: Category,
        name: &str,
    ) -> Vec<RegistryId> {
        let parent_matches = self
            .entries
            .get(&parent)
            .is_some_and(|entry| entry.is_category(parent_category));
        if !parent_matches {
            return Vec::new();
        }

        self.children
            .get(&parent)
            .into_iter()
            .flatten()
            .filter(|child| {
                self.entries
                    .get(child)
                    .is_some_and(|entry| entry.is_category(child_category) && entry.name_en == name)
            })
            .copied()
            .collect()
    }

    fn entries_named(&self, category: Category, name: &str) -> Vec<RegistryId> {
        self.by_name
            .get(&(category.registry_code().to_string(), name.to_string()))
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    fn children(&self, id: RegistryId) -> Vec<RegistryId> {
        self.children
            .get(&id)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    fn parents(&self, id: RegistryId) -> Vec<RegistryId> {
        self.parents
            .get(&id)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }
}
