use logainm_matchup::algorithm::matching::normalizer::{DIRECTIONAL_WORDS, variants};

#[test]
fn name_without_rules_is_unchanged() {
    assert_eq!(variants("Dublin").as_slice(), ["Dublin".to_string()]);
}

#[test]
fn original_always_comes_first() {
    for name in ["Carlow Upper", "Saint Mullins", "St. Mullins", "North Kilmore East", "Dublin"] {
        assert_eq!(variants(name)[0], name);
    }
}

#[test]
fn directional_words_round_trip() {
    for word in DIRECTIONAL_WORDS {
        let trailing = format!("Carlow {word}");
        let leading = format!("{word} Carlow");
        assert!(variants(&trailing).contains(&leading), "{trailing} -> {leading}");
        assert!(variants(&leading).contains(&trailing), "{leading} -> {trailing}");
    }
}

#[test]
fn saint_forms() {
    assert!(variants("St. Mullins").contains(&"Saint Mullins".to_string()));
    let saint = variants("Saint Mullins");
    assert!(saint.contains(&"St Mullins".to_string()));
    assert!(saint.contains(&"St. Mullins".to_string()));
}

#[test]
fn no_duplicates() {
    for name in ["Saint Mullins West", "Upper Upper", "St. Saint"] {
        let v = variants(name);
        let mut deduped = v.to_vec();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), v.len(), "{name}: {v:?}");
    }
}
