//! Alternate spellings of placenames
//!
//! The mapping dataset and the registry disagree on a few predictable
//! points: where a directional qualifier goes ("Carlow Upper" against
//! "Upper Carlow") and how "Saint" is abbreviated. Every rule is applied to
//! the original name on its own and the results are unioned.

use smallvec::SmallVec;

/// Qualifiers that may lead or trail a name
pub const DIRECTIONAL_WORDS: [&str; 6] = ["Upper", "Lower", "East", "West", "North", "South"];

/// Ordered, duplicate-free spellings of one name, the original first
pub type NameVariants = SmallVec<[String; 4]>;

fn push_unique(variants: &mut NameVariants, candidate: String) {
    if !candidate.is_empty() && !variants.contains(&candidate) {
        variants.push(candidate);
    }
}

/// Spellings to try for `name`, always starting with `name` itself
#[must_use]
pub fn variants(name: &str) -> NameVariants {
    let mut out = NameVariants::new();
    out.push(name.to_string());

    for word in DIRECTIONAL_WORDS {
        if let Some(rest) = name.strip_suffix(word).and_then(|r| r.strip_suffix(' ')) {
            push_unique(&mut out, format!("{word} {rest}"));
        }
        if let Some(rest) = name.strip_prefix(word).and_then(|r| r.strip_prefix(' ')) {
            push_unique(&mut out, format!("{rest} {word}"));
        }
    }

    if let Some(rest) = name.strip_prefix("St. ") {
        push_unique(&mut out, format!("Saint {rest}"));
    }
    if let Some(rest) = name.strip_prefix("Saint ") {
        push_unique(&mut out, format!("St {rest}"));
        push_unique(&mut out, format!("St. {rest}"));
    }

    out
}
