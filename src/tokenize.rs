//! Tokenizer/normalizer: raw question text → tagged token sequence.
//!
//! Steps, in order: lowercase the whole input, split into word tokens
//! (punctuation and apostrophes are separators, so "what's" becomes "what"
//! and "s"), POS-tag the *full* token list, then scrub stop words and
//! singularize the survivors. Tagging must happen before scrubbing —
//! accuracy degrades badly on a sentence with its function words removed.
//!
//! Empty input, or input reduced entirely by filtering, yields an empty
//! sequence. That is a valid outcome, not an error: every rule declines on
//! an empty sequence.

use std::collections::HashSet;

use crate::tag::TaggedToken;
use crate::tagger::{PosTagger, RuleTagger};
use crate::text::singularize;

/// The standard English stop-word list (the NLTK set, apostrophes split off).
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn",
    "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan",
    "shouldn", "wasn", "weren", "won", "wouldn",
];

/// Stop words that stay in the token stream anyway: a generic list would drop
/// them, but the rule handlers read signal from every one of these.
const KEPT_STOP_WORDS: &[&str] = &[
    "how", "all", "with", "have", "has", "who", "are", "and", "is", "each", "than",
];

/// Turns raw input text into a filtered, singularized, tagged token sequence.
pub struct Tokenizer {
    tagger: Box<dyn PosTagger + Send + Sync>,
    stop_words: HashSet<&'static str>,
}

impl Tokenizer {
    /// Tokenizer with the built-in rule tagger.
    pub fn new() -> Self {
        Self::with_tagger(Box::new(RuleTagger::default_english()))
    }

    /// Tokenizer with a caller-supplied tagging engine.
    pub fn with_tagger(tagger: Box<dyn PosTagger + Send + Sync>) -> Self {
        let stop_words = STOP_WORDS
            .iter()
            .copied()
            .filter(|w| !KEPT_STOP_WORDS.contains(w))
            .collect();
        Self { tagger, stop_words }
    }

    /// Normalize one question into its tagged token sequence.
    pub fn normalize(&self, raw: &str) -> Vec<TaggedToken> {
        let words = split_words(raw);
        if words.is_empty() {
            return Vec::new();
        }

        // Tag the full word list first; scrub afterwards.
        let tags = self.tagger.tag(&words);
        debug_assert_eq!(tags.len(), words.len());

        let tokens: Vec<TaggedToken> = words
            .into_iter()
            .zip(tags)
            .filter(|(word, _)| !self.stop_words.contains(word.as_str()))
            .map(|(word, tag)| TaggedToken::new(singularize(&word), tag))
            .collect();

        tracing::debug!(count = tokens.len(), "normalized question");
        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase and split into word tokens. Anything that is not alphanumeric
/// acts as a separator, which also splits contractions at the apostrophe.
fn split_words(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(s: &str) -> Vec<(String, String)> {
        Tokenizer::new()
            .normalize(s)
            .into_iter()
            .map(|t| (t.word, t.tag))
            .collect()
    }

    #[test]
    fn pure_stop_words_scrub_to_empty() {
        assert!(normalize("from above into myself").is_empty());
    }

    #[test]
    fn scrubbing_is_case_insensitive() {
        assert!(normalize("FROM ABOVE INTO MYSELF").is_empty());
    }

    #[test]
    fn kept_stop_words_survive() {
        let tokens = normalize("How do you do");
        assert_eq!(tokens, vec![("how".to_string(), "WRB".to_string())]);
    }

    #[test]
    fn empty_input_is_valid() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ?!  ").is_empty());
    }

    #[test]
    fn tokens_are_singularized_with_tags_preserved() {
        let tokens = normalize("What are the names of all the people?");
        assert_eq!(
            tokens,
            vec![
                ("are".to_string(), "VBP".to_string()),
                ("name".to_string(), "NNS".to_string()),
                ("all".to_string(), "DT".to_string()),
                ("person".to_string(), "NN".to_string()),
            ]
        );
    }

    #[test]
    fn contractions_split_at_apostrophe() {
        // "what's" → "what" (scrubbed) + "s" (scrubbed).
        let tokens = normalize("What's the bounty on every outlaw?");
        assert_eq!(
            tokens,
            vec![
                ("bounty".to_string(), "NN".to_string()),
                ("every".to_string(), "DT".to_string()),
                ("outlaw".to_string(), "NN".to_string()),
            ]
        );
    }

    #[test]
    fn relative_order_preserved() {
        let tokens = normalize("how many names start with J");
        let words: Vec<&str> = tokens.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(words, ["how", "many", "name", "start", "with", "j"]);
    }

    #[test]
    fn uppercase_and_lowercase_agree() {
        assert_eq!(
            normalize("HOW MANY NAMES START WITH J?"),
            normalize("how many names start with j?")
        );
    }
}
