//! Boundary objects read from the mapping dataset's extracts

use super::registry::RegistryRef;
use super::types::{BoundaryId, Category};

/// Containing units declared on an extract row, one column per level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentColumns {
    pub county: Option<BoundaryId>,
    pub barony: Option<BoundaryId>,
    pub civil_parish: Option<BoundaryId>,
}

impl ParentColumns {
    /// Declared unit at `level`; townlands are never parents
    #[must_use]
    pub fn at(&self, level: Category) -> Option<&BoundaryId> {
        match level {
            Category::County => self.county.as_ref(),
            Category::Barony => self.barony.as_ref(),
            Category::CivilParish => self.civil_parish.as_ref(),
            Category::Townland => None,
        }
    }
}

/// One administrative unit from the mapping dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryObject {
    pub id: BoundaryId,
    /// English display name, already falling back to the name tag
    pub name_en: String,
    pub name_ga: Option<String>,
    pub category: Category,
    pub parents: ParentColumns,
    /// Registry reference carried by the extract row itself
    pub registry_ref: Option<RegistryRef>,
}

impl BoundaryObject {
    /// Identifier of the unit this row places at `level`
    ///
    /// For the row's own level that is the row itself; above it, the
    /// matching parent column.
    #[must_use]
    pub fn id_at(&self, level: Category) -> Option<&BoundaryId> {
        if level == self.category {
            Some(&self.id)
        } else if level < self.category {
            self.parents.at(level)
        } else {
            None
        }
    }
}
