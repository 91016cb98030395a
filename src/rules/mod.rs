//! Rule handlers: independent question-shape classifiers.
//!
//! Each rule is a pure function over an immutable tagged token sequence. It
//! consults the schema registry and the similarity oracle, and either
//! produces a [`Query`] or declines with [`Outcome::NotApplicable`]. Rules
//! never see each other's output — the orchestrator fans one sequence out to
//! all of them — and they never mutate the sequence they scan.

use crate::query::Query;
use crate::schema::SchemaRegistry;
use crate::similarity::{SimilarityOracle, SAME_CONCEPT};
use crate::tag::TaggedToken;
use crate::text::equals_ignore_case;

mod count_letter;
mod count_null;
mod label_property;
mod list_with_property;
mod multi_label;
mod name_by_label;
mod relationship_order;

pub use count_letter::CountLetter;
pub use count_null::CountNull;
pub use label_property::LabelProperty;
pub use list_with_property::ListWithProperty;
pub use multi_label::MultiLabel;
pub use name_by_label::NameByLabel;
pub use relationship_order::RelationshipOrder;

/// Result of applying one rule to one tagged token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The rule recognized the question shape and produced a query.
    Matched(Query),
    /// The question is not this rule's shape. Not an error.
    NotApplicable,
}

impl Outcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Matched(_))
    }
}

/// Read-only collaborators shared by every rule.
pub struct RuleContext<'a> {
    pub schema: &'a SchemaRegistry,
    pub oracle: &'a dyn SimilarityOracle,
}

/// A question-shape classification rule.
pub trait Rule: Send + Sync {
    /// Stable rule label used to tag orchestrator output.
    fn name(&self) -> &'static str;

    /// Classify the sequence; produce a query or decline. Total: never panics
    /// on any sequence, including the empty one.
    fn apply(&self, cx: &RuleContext<'_>, tags: &[TaggedToken]) -> Outcome;
}

/// Words that imply an elided noun and a defining-property request
/// ("who are the X", "list the X").
pub(crate) const KEYWORDS: &[&str] = &["who", "every", "each", "all", "list", "return"];

/// Whether the question asks for an aggregate count: the literal word
/// "number", or a wh-adverb chunk directly followed by an adjective
/// ("how many", "how much").
pub(crate) fn has_count_indicator(tags: &[TaggedToken]) -> bool {
    if tags.iter().any(|t| t.word == "number") {
        return true;
    }
    tags.windows(2)
        .any(|w| w[0].tag == "WRB" && w[1].tag == "JJ")
}

/// Count the tokens the similarity oracle resolves to any schema label.
pub(crate) fn fuzzy_label_references(cx: &RuleContext<'_>, tags: &[TaggedToken]) -> usize {
    tags.iter()
        .map(|t| {
            cx.schema
                .labels()
                .iter()
                .filter(|l| cx.oracle.similarity(&t.word, &l.name) > SAME_CONCEPT)
                .count()
        })
        .sum()
}

/// Count the tokens the similarity oracle resolves to any schema relationship.
pub(crate) fn fuzzy_relationship_references(cx: &RuleContext<'_>, tags: &[TaggedToken]) -> usize {
    tags.iter()
        .map(|t| {
            cx.schema
                .relationships()
                .iter()
                .filter(|r| cx.oracle.similarity(&t.word, &r.name) > SAME_CONCEPT)
                .count()
        })
        .sum()
}

/// Nouns plus keyword tokens, the evidence that the question names (or
/// elides) enough things to be a retrieval request.
pub(crate) fn noun_evidence(tags: &[TaggedToken]) -> usize {
    tags.iter()
        .filter(|t| t.is_noun() || KEYWORDS.contains(&t.word.as_str()))
        .count()
}

/// The words of every noun-tagged token, in order.
pub(crate) fn nouns(tags: &[TaggedToken]) -> Vec<&str> {
    tags.iter()
        .filter(|t| t.is_noun())
        .map(|t| t.word.as_str())
        .collect()
}

/// Resolve the best-guess attribute for a count query: the property name,
/// across every label, with the maximum similarity to any adverb/noun token.
/// Ties keep the first maximal candidate inspected. `None` when nothing
/// scores above zero.
pub(crate) fn best_attribute(cx: &RuleContext<'_>, tags: &[TaggedToken]) -> Option<String> {
    let mut best: Option<(String, f64)> = None;
    for token in tags {
        if !matches!(token.tag.as_str(), "RB" | "NNS" | "NN") {
            continue;
        }
        for prop in cx.schema.all_properties() {
            let score = cx.oracle.similarity(prop, &token.word);
            if score > best.as_ref().map_or(0.0, |(_, s)| *s) {
                best = Some((prop.to_string(), score));
            }
        }
    }
    best.map(|(prop, _)| prop)
}

/// Whether a word is in a set, case-insensitively.
pub(crate) fn word_in(word: &str, set: &[&str]) -> bool {
    set.iter().any(|s| equals_ignore_case(s, word))
}
