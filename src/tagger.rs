//! Part-of-speech tagging boundary.
//!
//! The tagging engine proper is an external collaborator: the crate only
//! requires a function from a word list to an equal-length tag list. The
//! built-in [`RuleTagger`] is a deterministic lexicon + suffix tagger that
//! covers the question shapes the rule handlers were built for; a
//! CoreNLP-grade tagger can be swapped in behind the same trait.
//!
//! Tagging runs over the *full* token list before stop-word filtering —
//! accuracy degrades when function words are removed first, so the tokenizer
//! tags first and scrubs second.

/// Black-box POS tagger: word list in, aligned tag list out.
pub trait PosTagger {
    /// Assign one Penn-style tag per word. The output length must equal the
    /// input length.
    fn tag(&self, words: &[String]) -> Vec<String>;
}

/// Deterministic rule-based tagger.
///
/// Word-class membership lists first, then suffix heuristics, then a
/// noun default. All lookups assume lowercased input (the tokenizer
/// lowercases before tagging).
pub struct RuleTagger {
    determiners: Vec<&'static str>,
    wh_adverbs: Vec<&'static str>,
    wh_pronouns: Vec<&'static str>,
    pronouns: Vec<&'static str>,
    adjectives: Vec<&'static str>,
    verbs: Vec<&'static str>,
    modals: Vec<&'static str>,
    conjunctions: Vec<&'static str>,
    prepositions: Vec<&'static str>,
}

impl RuleTagger {
    /// Build the default English tagger.
    pub fn default_english() -> Self {
        Self {
            determiners: vec![
                "a", "an", "the", "all", "every", "each", "some", "any", "no", "this", "that",
                "these", "those", "both", "either", "neither",
            ],
            wh_adverbs: vec!["how", "where", "when", "why"],
            wh_pronouns: vec!["who", "what", "whom"],
            pronouns: vec![
                "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them",
                "everyone", "everything", "someone", "something", "anyone", "anything",
            ],
            adjectives: vec![
                "many", "much", "few", "several", "known", "unknown", "big", "small", "tall",
                "short", "large", "little", "last", "first", "other", "same",
            ],
            verbs: vec![
                "show", "give", "list", "tell", "find", "get", "return", "make", "see", "want",
                "count",
            ],
            modals: vec!["can", "could", "will", "would", "may", "might", "must", "should"],
            conjunctions: vec!["and", "or", "but", "nor"],
            prepositions: vec![
                "of", "in", "on", "at", "by", "with", "from", "to", "for", "about", "than", "as",
                "into", "over", "under",
            ],
        }
    }

    fn tag_word(&self, word: &str) -> &'static str {
        if word.chars().all(|c| c.is_ascii_digit()) {
            return "CD";
        }
        if self.determiners.contains(&word) {
            return "DT";
        }
        if self.wh_adverbs.contains(&word) {
            return "WRB";
        }
        if self.wh_pronouns.contains(&word) {
            return "WP";
        }
        if word == "whose" {
            return "WP$";
        }
        if word == "which" {
            return "WDT";
        }
        if self.pronouns.contains(&word) {
            return "PRP";
        }
        match word {
            "is" | "has" | "does" => return "VBZ",
            "are" | "am" | "have" | "do" => return "VBP",
            "was" | "were" | "had" | "did" => return "VBD",
            "be" => return "VB",
            "been" => return "VBN",
            "being" => return "VBG",
            "not" => return "RB",
            _ => {}
        }
        if self.modals.contains(&word) {
            return "MD";
        }
        if self.conjunctions.contains(&word) {
            return "CC";
        }
        if self.prepositions.contains(&word) {
            return "IN";
        }
        if self.adjectives.contains(&word) {
            return "JJ";
        }
        if self.verbs.contains(&word) {
            return "VB";
        }

        // Single letters read as common nouns ("start with J").
        let mut chars = word.chars();
        if matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic()) {
            return "NN";
        }

        if word.len() > 3 && word.ends_with("ing") {
            return "VBG";
        }
        if word.len() > 3 && word.ends_with("ed") {
            return "VBN";
        }
        if word.len() > 3 && (word.ends_with("ous") || word.ends_with("ful") || word.ends_with("ive"))
        {
            return "JJ";
        }

        // Noun default: plural if it looks plural.
        if word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") {
            "NNS"
        } else {
            "NN"
        }
    }
}

impl PosTagger for RuleTagger {
    fn tag(&self, words: &[String]) -> Vec<String> {
        words.iter().map(|w| self.tag_word(w).to_string()).collect()
    }
}
