use logainm_matchup::MatchupInputs;
use logainm_matchup::osm::lint::duplicate_registry_refs;
use logainm_matchup::osm::writer::{plan_updates, write_tagged_file};
use logainm_matchup::osm::{load_relations, read_relations};

use crate::utils::Fixture;

#[test]
fn matched_relations_are_tagged_for_upload() {
    let fixture = Fixture::new();
    let inputs = MatchupInputs::load(&fixture.config, Some(fixture.osm().as_path())).unwrap();
    let report = inputs.run(&fixture.config).unwrap();

    let updates = plan_updates(&inputs.relations, &report.matches, &fixture.config);
    assert_eq!(updates.keys().copied().collect::<Vec<_>>(), vec![30, 31, 32]);

    let output = fixture.path("tagged.osm");
    let modified = write_tagged_file(&fixture.osm(), &output, &updates).unwrap();
    assert_eq!(modified, 3);

    let relations = load_relations(&output).unwrap();
    assert_eq!(relations.len(), 5);
    let relation = |id: i64| relations.iter().find(|r| r.id == id).unwrap();

    let ballyboy = relation(30);
    assert_eq!(ballyboy.tag("logainm:ref"), Some("30"));
    assert_eq!(ballyboy.tag("logainm:url"), Some("https://www.logainm.ie/en/30"));
    assert_eq!(ballyboy.tag("name:en"), Some("Ballyboy Townland"));
    assert_eq!(ballyboy.tag("official_name:en"), Some("Ballyboy"));
    assert_eq!(ballyboy.tag("name:ga"), Some("An Baile Buí"));
    assert_eq!(ballyboy.tag("boundary"), Some("administrative"));

    let castlemore = relation(31);
    assert_eq!(castlemore.tag("logainm:ref"), Some("31"));
    assert_eq!(castlemore.tag("name:en"), Some("Castlemore"));

    let kilmore = relation(32);
    assert_eq!(kilmore.tag("logainm:url"), Some("https://www.logainm.ie/en/32.aspx"));
    assert_eq!(
        kilmore.tag("placenamesni:url"),
        Some("http://www.placenamesni.org/resultdetails.php?entry=4321")
    );
    assert_eq!(kilmore.tag("placenamesni:ref"), Some("4321"));

    assert_eq!(relation(99).tags.len(), 2);

    let xml = std::fs::read_to_string(&output).unwrap();
    assert_eq!(xml.matches(r#"action="modify""#).count(), 3);
    assert!(xml.contains(r#"<member type="way" ref="300" role="outer"/>"#));
}

#[test]
fn rerun_on_tagged_output_changes_nothing() {
    let fixture = Fixture::new();
    let inputs = MatchupInputs::load(&fixture.config, Some(fixture.osm().as_path())).unwrap();
    let report = inputs.run(&fixture.config).unwrap();
    let updates = plan_updates(&inputs.relations, &report.matches, &fixture.config);
    let output = fixture.path("tagged.osm");
    write_tagged_file(&fixture.osm(), &output, &updates).unwrap();

    let tagged = load_relations(&output).unwrap();
    assert!(plan_updates(&tagged, &report.matches, &fixture.config).is_empty());
}

#[test]
fn lint_finds_shared_reference() {
    let relations = read_relations(crate::utils::BOUNDARIES.as_bytes()).unwrap();
    let duplicates = duplicate_registry_refs(&relations);
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].reference, "777");
    assert_eq!(duplicates[0].relations.iter().copied().collect::<Vec<_>>(), vec![98, 99]);
}
