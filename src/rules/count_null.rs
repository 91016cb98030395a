//! Null counting: "how many animals have an unknown species".

use crate::query::Query;
use crate::tag::TaggedToken;

use super::{best_attribute, has_count_indicator, word_in, Outcome, Rule, RuleContext};

const NULL_WORDS: &[&str] = &["unknown"];
const NOT_NULL_WORDS: &[&str] = &["known"];

/// Counts nodes whose attribute is (or is not) null.
pub struct CountNull;

impl Rule for CountNull {
    fn name(&self) -> &'static str {
        "count-null"
    }

    fn apply(&self, cx: &RuleContext<'_>, tags: &[TaggedToken]) -> Outcome {
        if !has_count_indicator(tags) {
            return Outcome::NotApplicable;
        }

        let wants_null = tags.iter().any(|t| word_in(&t.word, NULL_WORDS));
        let wants_not_null = tags.iter().any(|t| word_in(&t.word, NOT_NULL_WORDS));
        let not_null = match (wants_null, wants_not_null) {
            (true, false) => false,
            (false, true) => true,
            _ => return Outcome::NotApplicable,
        };

        let Some(attribute) = best_attribute(cx, tags) else {
            return Outcome::NotApplicable;
        };

        Outcome::Matched(Query::CountNull {
            attribute,
            not_null,
        })
    }
}
