//! English morphology and case-folding helpers.
//!
//! These are lightweight, rule-based transformations — not a full NLP
//! morphology engine. They cover the cases the rule handlers depend on:
//! singularizing question words against the schema vocabulary and comparing
//! candidate words to schema names without caring about case.

use unicode_normalization::UnicodeNormalization;

/// Words that have no distinct singular form.
const UNCOUNTABLE: &[&str] = &[
    "species", "series", "sheep", "fish", "deer", "news", "information", "money", "rice",
    "equipment", "jeans",
];

/// Unicode-normalized, case-folded string equality.
///
/// Used whenever an exact (not fuzzy) lexical match against a known schema
/// name is required. Both sides are NFKD-normalized before folding, so
/// composed and decomposed spellings of the same text compare equal.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}

fn fold(s: &str) -> String {
    s.nfkd().collect::<String>().to_lowercase()
}

/// Reduce an English plural to its singular form.
///
/// Rule-based: irregular table, uncountables, then suffix rules. Bare
/// suffix-stripping reproduces some quirks of the original corpus that the
/// rule handlers compensate for ("has" → "ha"), so those are deliberate.
pub fn singularize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return lower;
    }

    match lower.as_str() {
        "people" => return "person".into(),
        "children" => return "child".into(),
        "men" => return "man".into(),
        "women" => return "woman".into(),
        "mice" => return "mouse".into(),
        "geese" => return "goose".into(),
        "feet" => return "foot".into(),
        "teeth" => return "tooth".into(),
        "oxen" => return "ox".into(),
        "indices" => return "index".into(),
        "vertices" => return "vertex".into(),
        "knives" => return "knife".into(),
        "wives" => return "wife".into(),
        "lives" => return "life".into(),
        "movies" => return "movie".into(),
        _ => {}
    }

    if lower.len() > 4 && lower.ends_with("ies") {
        return format!("{}y", &lower[..lower.len() - 3]);
    }
    if lower.ends_with("ves") {
        return format!("{}f", &lower[..lower.len() - 3]);
    }
    // Strip the "es" added after a sibilant or o. Plain "zes" stays out of
    // this list: "sizes" singularizes by dropping the final s, not the "es".
    if lower.ends_with("xes")
        || lower.ends_with("zzes")
        || lower.ends_with("ches")
        || lower.ends_with("shes")
        || lower.ends_with("sses")
        || lower.ends_with("oes")
    {
        return lower[..lower.len() - 2].to_string();
    }
    // "class", "status", "analysis" keep their final s.
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return lower;
    }
    if lower.ends_with('s') {
        return lower[..lower.len() - 1].to_string();
    }

    lower
}

/// Simple plural heuristic for English nouns, the inverse of [`singularize`].
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return lower;
    }

    match lower.as_str() {
        "person" => return "people".into(),
        "child" => return "children".into(),
        "man" => return "men".into(),
        "woman" => return "women".into(),
        "mouse" => return "mice".into(),
        "goose" => return "geese".into(),
        "foot" => return "feet".into(),
        "tooth" => return "teeth".into(),
        "ox" => return "oxen".into(),
        _ => {}
    }

    if lower.ends_with('y') {
        let stem = &lower[..lower.len() - 1];
        let before = stem.chars().last().unwrap_or('a');
        if !matches!(before, 'a' | 'e' | 'i' | 'o' | 'u') {
            return format!("{stem}ies");
        }
    }
    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{lower}es");
    }

    format!("{lower}s")
}

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            upper + chars.as_str()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_ignore_case_basic() {
        assert!(equals_ignore_case("Outlaw", "outlaw"));
        assert!(equals_ignore_case("PERSON", "person"));
        assert!(!equals_ignore_case("person", "animal"));
    }

    #[test]
    fn equals_ignore_case_is_reflexive_and_symmetric() {
        for w in ["name", "Bounty", "SPECIES", ""] {
            assert!(equals_ignore_case(w, w));
        }
        assert_eq!(
            equals_ignore_case("Angstrom", "angstrom"),
            equals_ignore_case("angstrom", "Angstrom")
        );
    }

    #[test]
    fn equals_ignore_case_normalization_stable() {
        // "é" composed (U+00E9) vs decomposed (U+0065 U+0301).
        assert!(equals_ignore_case("caf\u{e9}", "cafe\u{301}"));
    }

    #[test]
    fn singularize_regular_plurals() {
        assert_eq!(singularize("names"), "name");
        assert_eq!(singularize("outlaws"), "outlaw");
        assert_eq!(singularize("animals"), "animal");
        assert_eq!(singularize("bounties"), "bounty");
    }

    #[test]
    fn singularize_vowel_stem_es_words() {
        // "sizes" and "movies" keep their stem vowel; only true sibilant
        // plurals lose the whole "es".
        assert_eq!(singularize("sizes"), "size");
        assert_eq!(singularize("movies"), "movie");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("buzzes"), "buzz");
    }

    #[test]
    fn singularize_irregulars_and_uncountables() {
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("species"), "species");
        assert_eq!(singularize("series"), "series");
    }

    #[test]
    fn singularize_suffix_artifacts() {
        // Bare suffix stripping; the rule handlers' word sets account for these.
        assert_eq!(singularize("has"), "ha");
        assert_eq!(singularize("is"), "is");
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("class"), "class");
    }

    #[test]
    fn pluralize_round_trips_schema_words() {
        assert_eq!(pluralize("parent"), "parents");
        assert_eq!(pluralize("like"), "likes");
        assert_eq!(pluralize("dislike"), "dislikes");
        assert_eq!(pluralize("bounty"), "bounties");
        assert_eq!(pluralize("species"), "species");
        assert_eq!(pluralize("person"), "people");
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("outlaw"), "Outlaw");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("j"), "J");
    }
}
