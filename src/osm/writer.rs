//! Rewriting the OSM XML with registry tags
//!
//! The input is streamed through unchanged except for the relations that
//! have tag changes: those are buffered up to their closing element, their
//! existing `<tag>`s are updated in place, new tags are appended, and the
//! relation is marked `action="modify"` for upload.

use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info, warn};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use rustc_hash::FxHashMap;

use super::tags::registry_tags;
use super::{OsmRelation, get_attr_value};
use crate::config::MatchupConfig;
use crate::error::util::{safe_create_file, safe_open_file};
use crate::error::{MatchupError, Result};
use crate::models::MatchSet;

/// Tag changes per relation id
pub type TagUpdates = BTreeMap<i64, BTreeMap<String, String>>;

/// Work out the tag changes for every match that is a relation in the file
#[must_use]
pub fn plan_updates(
    relations: &[OsmRelation],
    matches: &MatchSet,
    config: &MatchupConfig,
) -> TagUpdates {
    let by_id: FxHashMap<i64, &OsmRelation> = relations.iter().map(|r| (r.id, r)).collect();
    let mut updates = TagUpdates::new();

    for (boundary_id, record) in matches {
        let Some(relation_id) = boundary_id
            .relation_id()
            .and_then(|id| i64::try_from(id).ok())
        else {
            warn!("Match {boundary_id} is not a relation, not tagging it");
            continue;
        };
        let Some(relation) = by_id.get(&relation_id) else {
            warn!("Relation {relation_id} is not in the OSM file, not tagging it");
            continue;
        };

        let changes = registry_tags(
            &relation.tags,
            record,
            config.registry_url(record.registry_id),
        );
        if changes.is_empty() {
            debug!("Relation {relation_id} already carries logainm:ref={}", record.registry_id);
            continue;
        }
        updates.insert(relation_id, changes);
    }

    updates
}

fn tag_element<'a>(key: &'a str, value: &'a str) -> BytesStart<'a> {
    let mut tag = BytesStart::new("tag");
    tag.push_attribute(("k", key));
    tag.push_attribute(("v", value));
    tag
}

fn changes_for<'u>(
    event: &BytesStart<'_>,
    updates: &'u TagUpdates,
) -> Result<Option<&'u BTreeMap<String, String>>> {
    let id = get_attr_value(event, b"id")?.and_then(|value| value.parse::<i64>().ok());
    Ok(id
        .and_then(|id| updates.get(&id))
        .filter(|changes| !changes.is_empty()))
}

fn write_relation<W: Write>(
    writer: &mut Writer<W>,
    start: &BytesStart<'_>,
    changes: &BTreeMap<String, String>,
    inner: Vec<Event<'static>>,
) -> Result<()> {
    let mut relation = BytesStart::new("relation");
    for attr in start.attributes().with_checks(false) {
        let attr = attr?;
        if attr.key.as_ref() != b"action" {
            relation.push_attribute(attr);
        }
    }
    relation.push_attribute(("action", "modify"));
    writer.write_event(Event::Start(relation))?;

    let mut remaining = changes.clone();
    for event in inner {
        match event {
            Event::Empty(tag) if tag.name().as_ref() == b"tag" => {
                let replacement =
                    get_attr_value(&tag, b"k")?.and_then(|key| remaining.remove_entry(&key));
                match replacement {
                    Some((key, value)) => {
                        writer.write_event(Event::Empty(tag_element(&key, &value)))?;
                    }
                    None => {
                        writer.write_event(Event::Empty(tag))?;
                    }
                }
            }
            other => writer.write_event(other)?,
        }
    }
    for (key, value) in &remaining {
        writer.write_event(Event::Empty(tag_element(key, value)))?;
    }

    writer.write_event(Event::End(BytesEnd::new("relation")))?;
    Ok(())
}

/// Copy `input` to `output`, applying `updates`; returns the number of relations changed
pub fn write_tagged<R: BufRead, W: Write>(
    input: R,
    output: W,
    updates: &TagUpdates,
) -> Result<usize> {
    let mut reader = Reader::from_reader(input);
    reader.trim_text(true);
    let mut writer = Writer::new_with_indent(output, b' ', 2);

    let mut pending: Option<(BytesStart<'static>, &BTreeMap<String, String>, Vec<Event<'static>>)> =
        None;
    let mut modified = 0;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(e) if pending.is_none() && e.name().as_ref() == b"relation" => {
                match changes_for(&e, updates)? {
                    Some(changes) => pending = Some((e.into_owned(), changes, Vec::new())),
                    None => writer.write_event(Event::Start(e))?,
                }
            }
            Event::Empty(e) if pending.is_none() && e.name().as_ref() == b"relation" => {
                match changes_for(&e, updates)? {
                    Some(changes) => {
                        write_relation(&mut writer, &e, changes, Vec::new())?;
                        modified += 1;
                    }
                    None => writer.write_event(Event::Empty(e))?,
                }
            }
            Event::End(e) if pending.is_some() && e.name().as_ref() == b"relation" => {
                if let Some((start, changes, inner)) = pending.take() {
                    write_relation(&mut writer, &start, changes, inner)?;
                    modified += 1;
                }
            }
            other => match pending.as_mut() {
                Some((_, _, inner)) => inner.push(other.into_owned()),
                None => writer.write_event(other)?,
            },
        }
        buf.clear();
    }

    writer
        .into_inner()
        .flush()
        .map_err(|e| MatchupError::XmlError(e.into()))?;
    Ok(modified)
}

/// Rewrite an OSM XML file with `updates` applied
pub fn write_tagged_file(input: &Path, output: &Path, updates: &TagUpdates) -> Result<usize> {
    let source = safe_open_file(input, "OSM boundary XML")?;
    let target = safe_create_file(output, "tagged OSM boundary XML")?;
    let modified = write_tagged(BufReader::new(source), BufWriter::new(target), updates)?;
    info!("Tagged {modified} relations, wrote {}", output.display());
    Ok(modified)
}
