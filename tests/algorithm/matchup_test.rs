use logainm_matchup::algorithm::matching::{
    Matchup, ObjectOutcome, OutcomeClass, RegistryIndex, ResolvedRefs, SkipReason, dedupe, limit,
};
use logainm_matchup::{BoundaryId, Category, MatchupInputs, RegistryId};

use crate::utils::Fixture;

fn id(raw: &str) -> BoundaryId {
    BoundaryId::new(raw).unwrap()
}

fn inputs(fixture: &Fixture) -> MatchupInputs {
    MatchupInputs::load(&fixture.config, Some(fixture.osm().as_path())).unwrap()
}

#[test]
fn index_sees_both_parents_of_a_split_townland() {
    let fixture = Fixture::new();
    let inputs = inputs(&fixture);
    assert_eq!(
        inputs.index.parents_of(Category::Townland, &id("-37")),
        [id("-20"), id("-21")]
    );
    assert!(inputs.index.parents_of(Category::Townland, &id("-39")).is_empty());
}

#[test]
fn passes_chain_through_the_accumulator() {
    let fixture = Fixture::new();
    let inputs = inputs(&fixture);
    let matchup = Matchup::new(&inputs.index, &inputs.registry);

    let counties = matchup.match_category(
        Category::County,
        inputs.extracts.objects(Category::County),
        ResolvedRefs::new(),
    );
    assert_eq!(counties.resolved.get(&id("-1")), Some(RegistryId(1)));

    let baronies = matchup.match_category(
        Category::Barony,
        inputs.extracts.objects(Category::Barony),
        counties.resolved,
    );
    // -10 is referenced in its extract row and gets no outcome
    assert_eq!(baronies.outcomes.len(), 1);
    assert_eq!(baronies.matches[&id("-11")].registry_id, RegistryId(11));

    let parishes = matchup.match_category(
        Category::CivilParish,
        inputs.extracts.objects(Category::CivilParish),
        baronies.resolved,
    );
    assert_eq!(parishes.matches[&id("-20")].registry_id, RegistryId(20));
    // matched through the saint variant, anchored on a barony matched this run
    assert_eq!(parishes.matches[&id("-21")].registry_id, RegistryId(21));

    let townlands = matchup.match_category(
        Category::Townland,
        inputs.extracts.objects(Category::Townland),
        parishes.resolved,
    );
    let outcome = |raw: &str| townlands.outcomes[&id(raw)];
    assert_eq!(outcome("-30"), ObjectOutcome::Matched);
    assert_eq!(outcome("-31"), ObjectOutcome::MatchedFastPath);
    assert_eq!(outcome("-32"), ObjectOutcome::Matched);
    assert_eq!(outcome("-33"), ObjectOutcome::Skipped(SkipReason::AmbiguousChildMatch));
    assert_eq!(outcome("-37"), ObjectOutcome::Skipped(SkipReason::AmbiguousParent));
    assert_eq!(outcome("-38"), ObjectOutcome::Skipped(SkipReason::NoChildMatch));
    assert_eq!(outcome("-39"), ObjectOutcome::Skipped(SkipReason::NoParentFound));
    assert_eq!(townlands.matches[&id("-32")].registry_id, RegistryId(32));
}

#[test]
fn townland_pass_alone_cannot_anchor_on_unmatched_parishes() {
    let fixture = Fixture::new();
    let inputs = inputs(&fixture);
    let pass = Matchup::new(&inputs.index, &inputs.registry).match_category(
        Category::Townland,
        inputs.extracts.objects(Category::Townland),
        ResolvedRefs::new(),
    );
    // only the live-tagged townland gets through
    assert_eq!(pass.matches.keys().collect::<Vec<_>>(), vec![&id("-31")]);
    assert_eq!(pass.outcomes[&id("-30")], ObjectOutcome::Skipped(SkipReason::NoParentFound));
}

#[test]
fn full_run_drops_contested_and_ambiguous() {
    let fixture = Fixture::new();
    let report = inputs(&fixture).run(&fixture.config).unwrap();

    let keys: Vec<&str> = report.matches.keys().map(BoundaryId::as_str).collect();
    assert_eq!(keys, vec!["-1", "-11", "-20", "-21", "-30", "-31", "-32"]);

    assert_eq!(report.conflicts.len(), 1);
    assert_eq!(report.conflicts[0].registry_id, RegistryId(12345));
    assert_eq!(report.conflicts[0].claimants, vec![id("-35"), id("-36")]);

    let counts = report.class_counts();
    assert_eq!(counts[&OutcomeClass::Matched], 9);
    assert_eq!(counts[&OutcomeClass::Ambiguous], 2);
    assert_eq!(counts[&OutcomeClass::Unmatched], 2);
}

#[test]
fn registry_ids_unique_after_run() {
    let fixture = Fixture::new();
    let report = inputs(&fixture).run(&fixture.config).unwrap();
    let mut ids: Vec<RegistryId> = report.matches.values().map(|r| r.registry_id).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn limit_after_dedupe_keeps_lowest_keys() {
    let mut fixture = Fixture::new();
    fixture.config.limit = Some(2);
    let report = inputs(&fixture).run(&fixture.config).unwrap();
    assert_eq!(
        report.matches.keys().map(BoundaryId::as_str).collect::<Vec<_>>(),
        vec!["-1", "-11"]
    );
}

#[test]
fn dedupe_then_limit_by_hand() {
    let fixture = Fixture::new();
    let inputs = inputs(&fixture);
    let index = RegistryIndex::build(inputs.extracts.iter());
    let matchup = Matchup::new(&index, &inputs.registry);

    let mut resolved = ResolvedRefs::new();
    let mut combined = logainm_matchup::MatchSet::new();
    for category in Category::HIERARCHY {
        let pass = matchup.match_category(category, inputs.extracts.objects(category), resolved);
        resolved = pass.resolved;
        combined.extend(pass.matches);
    }
    // without the live dataset -31 goes through its parish instead
    assert_eq!(combined[&id("-31")].registry_id, RegistryId(31));
    assert!(combined.contains_key(&id("-35")));

    let (deduped, conflicts) = dedupe(combined);
    assert!(!deduped.contains_key(&id("-35")));
    assert!(!deduped.contains_key(&id("-36")));
    assert_eq!(conflicts.len(), 1);
    assert_eq!(limit(deduped, 3).len(), 3);
}
