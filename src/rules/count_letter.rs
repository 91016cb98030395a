//! Letter-position counting: "how many names start with J".

use crate::query::{LetterCondition, Query};
use crate::tag::TaggedToken;

use super::{best_attribute, has_count_indicator, word_in, Outcome, Rule, RuleContext};

/// Words indicating STARTS WITH (singularized forms).
const START_WORDS: &[&str] = &["start", "starting", "begin", "beginning", "first", "front"];
/// Words indicating ENDS WITH.
const END_WORDS: &[&str] = &["end", "ending", "last", "back"];
/// Words indicating CONTAINS.
const CONTAIN_WORDS: &[&str] = &["contain", "position"];

/// Counts nodes whose attribute starts with / ends with / contains a letter.
///
/// The condition sets are checked CONTAINS → STARTS WITH → ENDS WITH so a
/// later match overwrites an earlier one: "how many names have a J in the
/// start position" hits CONTAINS through "position" first and is then
/// corrected to STARTS WITH. Evaluation-order policy, not an oversight.
pub struct CountLetter;

impl Rule for CountLetter {
    fn name(&self) -> &'static str {
        "count-letter"
    }

    fn apply(&self, cx: &RuleContext<'_>, tags: &[TaggedToken]) -> Outcome {
        let mut condition = None;
        for (words, cond) in [
            (CONTAIN_WORDS, LetterCondition::Contains),
            (START_WORDS, LetterCondition::StartsWith),
            (END_WORDS, LetterCondition::EndsWith),
        ] {
            if tags.iter().any(|t| word_in(&t.word, words)) {
                condition = Some(cond);
            }
        }

        let has_letter = tags
            .iter()
            .any(|t| t.is_single_letter() && t.tag == "NN");

        if !has_count_indicator(tags) || (condition.is_none() && !has_letter) {
            return Outcome::NotApplicable;
        }

        let value = tags
            .iter()
            .find(|t| t.is_single_letter() && matches!(t.tag.as_str(), "NN" | "JJ"))
            .and_then(|t| t.word.chars().next())
            .map(|c| c.to_ascii_uppercase());

        let (Some(condition), Some(value)) = (condition, value) else {
            return Outcome::NotApplicable;
        };
        let Some(attribute) = best_attribute(cx, tags) else {
            return Outcome::NotApplicable;
        };

        Outcome::Matched(Query::CountLetter {
            attribute,
            condition,
            value,
        })
    }
}
