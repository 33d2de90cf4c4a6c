//! Tags written onto a matched relation

use std::collections::BTreeMap;

use super::{PLACENAMESNI_REF_TAG, PLACENAMESNI_URL_TAG, REGISTRY_REF_TAG, REGISTRY_URL_TAG};
use crate::models::MatchRecord;

const PLACENAMESNI_ENTRY_PREFIX: &str = "http://www.placenamesni.org/resultdetails.php?entry=";

/// Entry number of a placenamesni.org result link
fn placenamesni_ref(link: &str) -> Option<&str> {
    link.strip_prefix(PLACENAMESNI_ENTRY_PREFIX)
        .filter(|entry| !entry.is_empty() && entry.bytes().all(|b| b.is_ascii_digit()))
}

/// Northern Ireland placenames tags; never overwrites existing values
fn placenamesni_tags(
    changes: &mut BTreeMap<String, String>,
    existing: &BTreeMap<String, String>,
    link: Option<&str>,
) {
    let Some(link) = link.filter(|link| !link.is_empty()) else {
        return;
    };
    let mut set_if_missing = |key: &str, value: &str| {
        if !existing.contains_key(key) {
            changes.insert(key.to_string(), value.to_string());
        }
    };
    set_if_missing(PLACENAMESNI_URL_TAG, link);
    if let Some(entry) = placenamesni_ref(link) {
        set_if_missing(PLACENAMESNI_REF_TAG, entry);
    }
}

/// Name tag for one language, or its `official_name:` counterpart when the
/// relation already has a different name in that language
fn name_tag(
    changes: &mut BTreeMap<String, String>,
    existing: &BTreeMap<String, String>,
    lang: &str,
    registry_name: Option<&str>,
) {
    let Some(name) = registry_name.filter(|name| !name.is_empty()) else {
        return;
    };
    let key = format!("name:{lang}");
    match existing.get(&key) {
        None => {
            changes.insert(key, name.to_string());
        }
        Some(current) if current != name => {
            changes.insert(format!("official_name:{lang}"), name.to_string());
        }
        Some(_) => {}
    }
}

/// Tags to set on a relation matched to `record`
///
/// `logainm:url` takes the record's permalink, or `fallback_url` when the
/// registry has none. Keys whose value on the relation already equals the
/// new value are left out, so an empty result means the relation needs no
/// edit.
#[must_use]
pub fn registry_tags(
    existing: &BTreeMap<String, String>,
    record: &MatchRecord,
    fallback_url: String,
) -> BTreeMap<String, String> {
    let url = record.permalink.clone().unwrap_or(fallback_url);
    let mut changes = BTreeMap::new();
    changes.insert(REGISTRY_REF_TAG.to_string(), record.registry_id.to_string());
    changes.insert(REGISTRY_URL_TAG.to_string(), url);
    placenamesni_tags(&mut changes, existing, record.placenamesni_link.as_deref());

    name_tag(&mut changes, existing, "ga", record.name_ga.as_deref());
    name_tag(&mut changes, existing, "en", Some(record.name_en.as_str()));

    changes.retain(|key, value| existing.get(key) != Some(value));
    changes
}
