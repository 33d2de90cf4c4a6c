//! Access to the placename registry
//!
//! The matching passes only ever query the registry, never write to it. The
//! [`RegistryStore`] trait is the seam between the passes and however the
//! registry happens to be stored; [`InMemoryRegistry`] loads it from the CSV
//! export.

pub mod memory;

use std::fmt;

use itertools::Itertools;

use crate::models::{Category, RegistryEntry, RegistryId};

pub use memory::InMemoryRegistry;

/// Read-only queries the matchup makes against the registry
pub trait RegistryStore {
    /// Attributes of one entry
    fn entry(&self, id: RegistryId) -> Option<RegistryEntry>;

    /// Entries of `child_category` directly contained by `parent` whose
    /// English name equals `name`
    ///
    /// Yields nothing when `parent` is not itself of `parent_category`.
    fn children_named(
        &self,
        parent: RegistryId,
        parent_category: Category,
        child_category: Category,
        name: &str,
    ) -> Vec<RegistryId>;

    /// Entries of `category` whose English name equals `name`, wherever they are
    fn entries_named(&self, category: Category, name: &str) -> Vec<RegistryId>;

    /// Every entry directly contained by `id`
    fn children(&self, id: RegistryId) -> Vec<RegistryId>;

    /// Every entry directly containing `id`
    fn parents(&self, id: RegistryId) -> Vec<RegistryId>;
}

/// One registry entry with its immediate neighbours, for manual review
#[derive(Debug, Clone)]
pub struct EntryDescription {
    pub entry: RegistryEntry,
    pub parents: Vec<RegistryEntry>,
    pub children: Vec<RegistryEntry>,
}

/// Describe an entry and its direct parents and children
///
/// Neighbours are ordered by category code, then name.
pub fn describe(store: &dyn RegistryStore, id: RegistryId) -> Option<EntryDescription> {
    let entry = store.entry(id)?;
    let resolve = |ids: Vec<RegistryId>| -> Vec<RegistryEntry> {
        ids.into_iter()
            .filter_map(|id| store.entry(id))
            .sorted_by(|a, b| {
                (&a.category_code, &a.name_en, a.id).cmp(&(&b.category_code, &b.name_en, b.id))
            })
            .collect()
    };

    Some(EntryDescription {
        parents: resolve(store.parents(id)),
        children: resolve(store.children(id)),
        entry,
    })
}

fn write_entry(f: &mut fmt::Formatter<'_>, entry: &RegistryEntry) -> fmt::Result {
    write!(
        f,
        "[{}] {} {}/{}",
        entry.category_code,
        entry.id,
        entry.name_en,
        entry.name_ga.as_deref().unwrap_or("-")
    )
}

impl fmt::Display for EntryDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logainm ")?;
        write_entry(f, &self.entry)?;
        writeln!(f)?;

        for (title, entries) in [("Children", &self.children), ("Parents", &self.parents)] {
            writeln!(f, "{title} objects:")?;
            if entries.is_empty() {
                writeln!(f, " None")?;
            }
            for entry in entries {
                write!(f, " * ")?;
                write_entry(f, entry)?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
