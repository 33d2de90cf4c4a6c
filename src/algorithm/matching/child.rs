//! Finding an object's registry entry by name

use log::debug;

use super::normalizer::{NameVariants, variants};
use super::outcome::Lookup;
use crate::models::{Category, RegistryId};
use crate::registry::RegistryStore;

/// Prefixes the mapping dataset sometimes puts before county names
const COUNTY_PREFIXES: [&str; 2] = ["County ", "Co. "];

/// Try each spelling in order: the first with exactly one hit wins, the
/// first with several hits makes the whole lookup ambiguous
fn first_unique(
    spellings: &NameVariants,
    mut candidates: impl FnMut(&str) -> Vec<RegistryId>,
) -> Lookup<RegistryId> {
    for spelling in spellings {
        match candidates(spelling.as_str()).as_slice() {
            [] => {}
            [id] => return Lookup::Found(*id),
            several => {
                debug!("\"{spelling}\" names {} registry entries: {several:?}", several.len());
                return Lookup::Ambiguous;
            }
        }
    }
    Lookup::NotFound
}

/// Child of `parent` in the registry whose name matches `name`
#[must_use]
pub fn find_child(
    store: &dyn RegistryStore,
    parent: RegistryId,
    parent_category: Category,
    child_category: Category,
    name: &str,
) -> Lookup<RegistryId> {
    first_unique(&variants(name), |spelling| {
        store.children_named(parent, parent_category, child_category, spelling)
    })
}

/// County entry in the registry whose name matches `name`
///
/// Counties have no parent level to anchor on, so the lookup runs over
/// every `CON` entry. "County Carlow" and "Co. Carlow" are tried as
/// "Carlow" too.
#[must_use]
pub fn find_county(store: &dyn RegistryStore, name: &str) -> Lookup<RegistryId> {
    let mut spellings = variants(name);
    for prefix in COUNTY_PREFIXES {
        if let Some(bare) = name.strip_prefix(prefix) {
            for spelling in variants(bare) {
                if !spellings.contains(&spelling) {
                    spellings.push(spelling);
                }
            }
        }
    }
    first_unique(&spellings, |spelling| store.entries_named(Category::County, spelling))
}
