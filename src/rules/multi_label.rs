//! Multi-label retrieval: "who are the animals and outlaws".

use crate::query::Query;
use crate::tag::TaggedToken;
use crate::text::equals_ignore_case;

use super::{
    fuzzy_label_references, fuzzy_relationship_references, has_count_indicator, nouns, Outcome,
    Rule, RuleContext, KEYWORDS,
};

/// Matches nodes carrying two or more labels at once.
///
/// Same keyword/property logic as the single-label rule, but requires at
/// least two label nouns and tolerates at most one relationship reference.
/// Property candidates pool across all matched labels' property lists.
pub struct MultiLabel;

impl Rule for MultiLabel {
    fn name(&self) -> &'static str {
        "multi-label"
    }

    fn apply(&self, cx: &RuleContext<'_>, tags: &[TaggedToken]) -> Outcome {
        if fuzzy_label_references(cx, tags) <= 1 {
            return Outcome::NotApplicable;
        }
        if fuzzy_relationship_references(cx, tags) > 1 {
            return Outcome::NotApplicable;
        }
        if has_count_indicator(tags) {
            return Outcome::NotApplicable;
        }

        let nouns = nouns(tags);

        // Labels in the order their nouns were found.
        let mut labels = Vec::new();
        for noun in &nouns {
            if let Some(def) = cx.schema.label(noun) {
                labels.push(def);
            }
        }
        if labels.len() < 2 {
            return Outcome::NotApplicable;
        }

        let mut properties: Vec<String> = Vec::new();
        let keyword_present = tags
            .iter()
            .any(|t| KEYWORDS.iter().any(|k| equals_ignore_case(k, &t.word)));
        if keyword_present {
            for label in &labels {
                let defining = label.defining_property();
                if !properties.iter().any(|p| equals_ignore_case(p, defining)) {
                    properties.push(defining.to_string());
                }
            }
        }
        for noun in &nouns {
            for label in &labels {
                if label.has_property(noun)
                    && !properties.iter().any(|p| equals_ignore_case(p, noun))
                {
                    properties.push(noun.to_string());
                }
            }
        }

        if properties.is_empty() {
            return Outcome::NotApplicable;
        }

        Outcome::Matched(Query::NodeProjection {
            labels: labels.iter().map(|l| l.name.clone()).collect(),
            properties,
        })
    }
}
