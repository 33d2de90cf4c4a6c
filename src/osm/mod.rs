//! The live OpenStreetMap boundary dataset
//!
//! Boundaries arrive as an OSM XML file of relations. The matchup reads the
//! relations' tags to learn which objects already carry a registry
//! reference, and at the end writes the file back out with new tags on the
//! matched relations.

pub mod lint;
pub mod tags;
pub mod writer;

use std::collections::BTreeMap;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::models::{BoundaryId, RegistryRef};

/// Tag key holding the registry reference
pub const REGISTRY_REF_TAG: &str = "logainm:ref";
/// Tag key holding the registry permalink
pub const REGISTRY_URL_TAG: &str = "logainm:url";
pub const PLACENAMESNI_URL_TAG: &str = "placenamesni:url";
pub const PLACENAMESNI_REF_TAG: &str = "placenamesni:ref";

/// One relation from the live dataset, with its tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsmRelation {
    /// OSM id; negative for objects not yet uploaded
    pub id: i64,
    pub tags: BTreeMap<String, String>,
}

impl OsmRelation {
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Extract key of this relation, for relations that exist upstream
    #[must_use]
    pub fn boundary_id(&self) -> Option<BoundaryId> {
        u64::try_from(self.id).ok().filter(|id| *id > 0).map(BoundaryId::from_relation)
    }

    /// Parsed `logainm:ref` tag
    #[must_use]
    pub fn registry_ref(&self, separator: char) -> Option<RegistryRef> {
        self.tag(REGISTRY_REF_TAG)
            .and_then(|raw| RegistryRef::parse(raw, separator))
    }
}

/// Value of attribute `key` on an element
pub(crate) fn get_attr_value(event: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in event.attributes().with_checks(false) {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.to_string()));
        }
    }
    Ok(None)
}

fn start_relation(event: &BytesStart<'_>) -> Result<OsmRelation> {
    let id = get_attr_value(event, b"id")?
        .and_then(|value| value.parse::<i64>().ok())
        .unwrap_or_default();
    Ok(OsmRelation {
        id,
        tags: BTreeMap::new(),
    })
}

/// Read every relation and its tags; nodes and ways are skipped
pub fn read_relations<R: BufRead>(input: R) -> Result<Vec<OsmRelation>> {
    let mut reader = Reader::from_reader(input);
    reader.trim_text(true);

    let mut relations = Vec::new();
    let mut current: Option<OsmRelation> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(e) if e.name().as_ref() == b"relation" => {
                current = Some(start_relation(&e)?);
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"relation" => relations.push(start_relation(&e)?),
                b"tag" => {
                    if let Some(relation) = current.as_mut() {
                        let key = get_attr_value(&e, b"k")?;
                        let value = get_attr_value(&e, b"v")?;
                        if let (Some(key), Some(value)) = (key, value) {
                            relation.tags.insert(key, value);
                        }
                    }
                }
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"relation" => {
                if let Some(relation) = current.take() {
                    relations.push(relation);
                }
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(relations)
}

/// Read the relations of an OSM XML file
pub fn load_relations(path: &Path) -> Result<Vec<OsmRelation>> {
    let file = safe_open_file(path, "OSM boundary XML")?;
    let relations = read_relations(BufReader::new(file))?;
    info!("Read {} relations from {}", relations.len(), path.display());
    Ok(relations)
}
