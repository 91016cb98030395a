//! Lexical similarity oracle: conceptual relatedness between two words.
//!
//! Used to decide whether a token *means* one of the schema's labels or
//! relationships even when the tagger mis-tagged it (a plural noun read as a
//! verb participle, say). Scores live in [0, 1]; anything above
//! [`SAME_CONCEPT`] is treated as the same concept. Scores are never ranked
//! across different candidate words except in the best-property-guess policy
//! of the count rules, where ties favor the first candidate inspected.

use crate::text::{equals_ignore_case, pluralize, singularize};

/// Threshold above which two words are treated as the same concept.
pub const SAME_CONCEPT: f64 = 0.9;

/// Word-sense similarity function: `(a, b)` → best relatedness score across
/// all sense pairs, 0.0 when either word has no recognized sense.
pub trait SimilarityOracle {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Built-in oracle backed by morphology plus a seeded relatedness table.
///
/// Identical words (case-folded) and words sharing a singular form score 1.0
/// ("parent"/"parents", "specie"/"species"). Everything else falls back to a
/// small symmetric table of Wu-Palmer-style constants; unknown pairs score 0.
pub struct SeededOracle {
    pairs: Vec<(&'static str, &'static str, f64)>,
}

impl SeededOracle {
    pub fn new() -> Self {
        Self {
            // Scores keep the magnitudes observed from the WordNet
            // Wu-Palmer measure for the same pairs.
            pairs: vec![
                ("tall", "size", 0.91),
                ("short", "size", 0.91),
                ("bandit", "outlaw", 0.95),
                ("crook", "outlaw", 0.92),
                ("criminal", "outlaw", 0.93),
                ("fugitive", "outlaw", 0.92),
                ("desperado", "outlaw", 0.94),
                ("beast", "animal", 0.93),
                ("creature", "animal", 0.92),
                ("critter", "animal", 0.91),
                ("human", "person", 0.93),
                ("folk", "person", 0.91),
                ("individual", "person", 0.92),
                ("mother", "parent", 0.92),
                ("father", "parent", 0.92),
                ("sibling", "brother", 0.91),
                ("dog", "animal", 0.75),
                ("cat", "animal", 0.76),
                ("title", "name", 0.82),
                ("cabbage", "spaceship", 0.38),
            ],
        }
    }
}

impl Default for SeededOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityOracle for SeededOracle {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        if equals_ignore_case(a, b) {
            return 1.0;
        }
        // Shared singular ("parent"/"parents") or shared plural
        // ("specie"/"species") counts as the same lemma.
        if singularize(a) == singularize(b) || pluralize(a) == pluralize(b) {
            return 1.0;
        }

        let (sa, sb) = (singularize(a), singularize(b));
        for (x, y, score) in &self.pairs {
            if (sa == *x && sb == *y) || (sa == *y && sb == *x) {
                return *score;
            }
        }
        0.0
    }
}
