use std::fs;

use logainm_matchup::registry::describe;
use logainm_matchup::{InMemoryRegistry, MatchupConfig, MatchupError, MatchupInputs, RegistryId};

use crate::utils::{Fixture, write_file};

#[test]
fn matches_serialize_keyed_by_boundary_id() {
    let fixture = Fixture::new();
    let report = MatchupInputs::load(&fixture.config, Some(fixture.osm().as_path()))
        .unwrap()
        .run(&fixture.config)
        .unwrap();

    let json = serde_json::to_value(&report.matches).unwrap();
    assert_eq!(json["-30"]["registry_id"], 30);
    assert_eq!(json["-30"]["name_en"], "Ballyboy");
    assert_eq!(json["-30"]["name_ga"], "An Baile Buí");
    assert!(json.get("-35").is_none());
}

#[test]
fn report_serializes_outcomes_per_level() {
    let fixture = Fixture::new();
    let report = MatchupInputs::load(&fixture.config, None)
        .unwrap()
        .run(&fixture.config)
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcomes"]["townland"]["-39"]["outcome"], "skipped");
    assert_eq!(json["outcomes"]["townland"]["-39"]["reason"], "no_parent_found");
    assert_eq!(json["conflicts"][0]["registry_id"], 12345);
}

#[test]
fn config_file_drives_the_run() {
    let fixture = Fixture::new();
    let config_json = serde_json::json!({
        "extract_dir": fixture.dir.path(),
        "registry_names": fixture.path("names.csv"),
        "registry_contains": fixture.path("geometric_contains.csv"),
        "categories": ["county", "barony"],
    });
    write_file(fixture.dir.path(), "config.json", &config_json.to_string());

    let config = MatchupConfig::from_json_file(&fixture.path("config.json")).unwrap();
    let report = MatchupInputs::load(&config, None).unwrap().run(&config).unwrap();
    let keys: Vec<&str> = report.matches.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["-1", "-11"]);
}

#[test]
fn renamed_extract_files() {
    let fixture = Fixture::new();
    fs::rename(fixture.path("townlands-no-geom.csv"), fixture.path("tl.csv")).unwrap();

    let mut config = fixture.config.clone();
    assert!(matches!(
        MatchupInputs::load(&config, None),
        Err(MatchupError::IoError { .. })
    ));

    config.extract_files.townlands = "tl.csv".to_string();
    assert!(MatchupInputs::load(&config, None).is_ok());
}

#[test]
fn malformed_registry_is_fatal() {
    let fixture = Fixture::new();
    write_file(fixture.dir.path(), "names.csv", "logainm_id,name_en\nnot-a-number,Carlow\n");
    assert!(matches!(
        MatchupInputs::load(&fixture.config, None),
        Err(MatchupError::CsvError { .. })
    ));
}

#[test]
fn inspect_lists_neighbours() {
    let fixture = Fixture::new();
    let registry = InMemoryRegistry::load(
        &fixture.path("names.csv"),
        &fixture.path("geometric_contains.csv"),
    )
    .unwrap();

    let description = describe(&registry, RegistryId(21)).unwrap();
    let text = description.to_string();
    assert!(text.starts_with("Logainm [PAR] 21 Saint Mullins/Tigh Moling"));
    assert!(text.contains(" * [BAR] 11 Forth/Fotharta"));
    assert!(text.contains(" * [BF] 33 Knockmore/An Cnoc Mór"));
    assert!(text.contains(" * [BF] 34 Knockmore/An Cnoc Mór"));
}
