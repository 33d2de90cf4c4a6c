//! Extract CSV loading
//!
//! Each hierarchy level has its own extract of the mapping dataset. Rows are
//! typed into [`BoundaryObject`]s as they are read; unknown columns (such as
//! geometry) are ignored.

use std::collections::BTreeMap;
use std::io::{self, BufReader};
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::config::MatchupConfig;
use crate::error::util::{safe_open_file, validate_directory};
use crate::error::{MatchupError, Result};
use crate::models::{BoundaryId, BoundaryObject, Category, ParentColumns, RegistryRef};

/// Raw extract row, one column per field the matchup reads
#[derive(Debug, Deserialize)]
struct ExtractRow {
    #[serde(rename = "OSM_ID", default)]
    osm_id: String,
    #[serde(rename = "NAME_EN", default)]
    name_en: String,
    #[serde(rename = "NAME_TAG", default)]
    name_tag: String,
    #[serde(rename = "NAME_GA", default)]
    name_ga: String,
    #[serde(rename = "LOGAINM_RE", default)]
    logainm_ref: String,
    #[serde(rename = "CO_OSM_ID", default)]
    county: String,
    #[serde(rename = "BAR_OSM_ID", default)]
    barony: String,
    #[serde(rename = "CP_OSM_ID", default)]
    civil_parish: String,
}

impl ExtractRow {
    fn into_object(self, category: Category, separator: char) -> Option<BoundaryObject> {
        let id = BoundaryId::new(&self.osm_id)?;
        let name_en = if self.name_en.trim().is_empty() {
            self.name_tag.trim().to_string()
        } else {
            self.name_en.trim().to_string()
        };
        let name_ga = Some(self.name_ga.trim().to_string()).filter(|name| !name.is_empty());

        Some(BoundaryObject {
            id,
            name_en,
            name_ga,
            category,
            parents: ParentColumns {
                county: BoundaryId::new(&self.county),
                barony: BoundaryId::new(&self.barony),
                civil_parish: BoundaryId::new(&self.civil_parish),
            },
            registry_ref: RegistryRef::parse(&self.logainm_ref, separator),
        })
    }
}

/// Read one extract from any reader
pub fn read_extract<R: io::Read>(
    reader: R,
    category: Category,
    separator: char,
) -> csv::Result<Vec<BoundaryObject>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut objects = Vec::new();
    let mut skipped = 0usize;
    for row in rdr.deserialize() {
        let row: ExtractRow = row?;
        match row.into_object(category, separator) {
            Some(object) => objects.push(object),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {skipped} {category} rows without an OSM_ID");
    }
    Ok(objects)
}

/// Read one extract file
pub fn load_extract(
    path: &Path,
    category: Category,
    separator: char,
) -> Result<Vec<BoundaryObject>> {
    let file = safe_open_file(path, &format!("{category} extract"))?;
    let objects = read_extract(BufReader::new(file), category, separator)
        .map_err(|e| MatchupError::csv(path, e))?;
    info!("Loaded {} {category} rows from {}", objects.len(), path.display());
    Ok(objects)
}

/// All extracts of a run, grouped by level
#[derive(Debug, Clone, Default)]
pub struct ExtractSet {
    by_category: BTreeMap<Category, Vec<BoundaryObject>>,
}

impl ExtractSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every level's extract named by the config
    ///
    /// All four files are required even when only some levels are matched,
    /// since any of them may declare parents or carry registry references.
    pub fn load(config: &MatchupConfig) -> Result<Self> {
        validate_directory(&config.extract_dir, "extract files")?;
        let mut set = Self::new();
        for category in Category::HIERARCHY {
            let objects = load_extract(
                &config.extract_path(category),
                category,
                config.multi_ref_separator,
            )?;
            set.insert(category, objects);
        }
        Ok(set)
    }

    /// Replace the rows of one level
    pub fn insert(&mut self, category: Category, objects: Vec<BoundaryObject>) {
        self.by_category.insert(category, objects);
    }

    /// Rows of one level, in file order
    #[must_use]
    pub fn objects(&self, category: Category) -> &[BoundaryObject] {
        self.by_category.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Every row, outermost level first
    pub fn iter(&self) -> impl Iterator<Item = &BoundaryObject> {
        self.by_category.values().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
