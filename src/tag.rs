//! Tagged tokens: the (word, part-of-speech) pairs every rule consumes.
//!
//! A token is produced once per surviving input word and never mutated
//! afterwards. Identity is positional — the bigram/trigram pattern rules
//! depend on the order of tokens within the sequence.

/// Penn-style noun tags.
pub const NOUN_TAGS: &[&str] = &["NN", "NNS", "NNP", "NNPS"];

/// Noun tags extended with cardinal numbers, used by the property-browsing rule.
pub const NOUN_OR_CD_TAGS: &[&str] = &["NN", "NNS", "NNP", "NNPS", "CD"];

/// Wh-pronoun and possessive wh-pronoun tags.
pub const WH_PRONOUN_TAGS: &[&str] = &["WP", "WP$"];

/// Linking tags: wh-pronouns plus present-tense verbs ("that are", "who is").
pub const LINKER_TAGS: &[&str] = &["WP", "WP$", "VBP", "VBZ"];

/// A single tagged token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Singularized, lowercased surface form.
    pub word: String,
    /// Part-of-speech tag assigned by the (black-box) tagger, e.g. "NNS".
    pub tag: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// Whether the tag is one of the Penn noun tags.
    pub fn is_noun(&self) -> bool {
        NOUN_TAGS.contains(&self.tag.as_str())
    }

    /// Whether the token is a single alphabetic character (a letter literal
    /// like the "J" in "how many names start with J").
    pub fn is_single_letter(&self) -> bool {
        let mut chars = self.word.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
    }
}

impl std::fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.word, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noun_detection() {
        assert!(TaggedToken::new("name", "NNS").is_noun());
        assert!(TaggedToken::new("outlaw", "NN").is_noun());
        assert!(!TaggedToken::new("are", "VBP").is_noun());
    }

    #[test]
    fn single_letter_detection() {
        assert!(TaggedToken::new("j", "NN").is_single_letter());
        assert!(!TaggedToken::new("jo", "NN").is_single_letter());
        assert!(!TaggedToken::new("1", "CD").is_single_letter());
    }
}
