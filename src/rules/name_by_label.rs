//! Synonym-label retrieval: "who are the bandits".
//!
//! Fallback for questions that mean a label without naming it. A token that
//! names a label exactly belongs to the single-label rule, so this one only
//! fires when the oracle resolves a token to a label fuzzily.

use crate::query::Query;
use crate::schema::LabelDef;
use crate::similarity::SAME_CONCEPT;
use crate::tag::TaggedToken;
use crate::text::equals_ignore_case;

use super::{
    fuzzy_relationship_references, has_count_indicator, nouns, Outcome, Rule, RuleContext,
    KEYWORDS,
};

/// Resolves a single label from a near-synonym and returns its properties.
pub struct NameByLabel;

impl Rule for NameByLabel {
    fn name(&self) -> &'static str {
        "name-by-label"
    }

    fn apply(&self, cx: &RuleContext<'_>, tags: &[TaggedToken]) -> Outcome {
        if has_count_indicator(tags) {
            return Outcome::NotApplicable;
        }
        if fuzzy_relationship_references(cx, tags) > 0 {
            return Outcome::NotApplicable;
        }
        // Exact label names are the single-label rule's territory.
        if tags.iter().any(|t| cx.schema.label(&t.word).is_some()) {
            return Outcome::NotApplicable;
        }

        // Exactly one distinct label may resolve fuzzily.
        let mut label: Option<&LabelDef> = None;
        for token in tags {
            for def in cx.schema.labels() {
                if cx.oracle.similarity(&token.word, &def.name) > SAME_CONCEPT {
                    match label {
                        Some(prev) if !std::ptr::eq(prev, def) => return Outcome::NotApplicable,
                        _ => label = Some(def),
                    }
                }
            }
        }
        let Some(label) = label else {
            return Outcome::NotApplicable;
        };

        let mut properties: Vec<String> = Vec::new();
        if tags
            .iter()
            .any(|t| KEYWORDS.iter().any(|k| equals_ignore_case(k, &t.word)))
        {
            properties.push(label.defining_property().to_string());
        }
        for noun in nouns(tags) {
            if label.has_property(noun) && !properties.iter().any(|p| equals_ignore_case(p, noun))
            {
                properties.push(noun.to_string());
            }
        }

        if properties.is_empty() {
            return Outcome::NotApplicable;
        }

        Outcome::Matched(Query::NodeProjection {
            labels: vec![label.name.clone()],
            properties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Fixture;
    use super::*;

    #[test]
    fn synonym_resolves_to_label() {
        let fx = Fixture::new();
        assert_eq!(
            fx.expect_query(&NameByLabel, "Who are the bandits?"),
            "MATCH (n :Outlaw) RETURN n.name"
        );
        assert_eq!(
            fx.expect_query(&NameByLabel, "List all the humans"),
            "MATCH (n :Person) RETURN n.name"
        );
    }

    #[test]
    fn explicit_property_of_resolved_label() {
        let fx = Fixture::new();
        assert_eq!(
            fx.expect_query(&NameByLabel, "What are the bounties of the bandits?"),
            "MATCH (n :Outlaw) RETURN n.bounty"
        );
    }

    #[test]
    fn declines_on_exact_label_word() {
        let fx = Fixture::new();
        assert_eq!(
            fx.apply(&NameByLabel, "Who are all the outlaws?"),
            Outcome::NotApplicable
        );
    }

    #[test]
    fn two_synonyms_of_one_label_still_match() {
        let fx = Fixture::new();
        assert_eq!(
            fx.expect_query(&NameByLabel, "Who are the bandits and crooks?"),
            "MATCH (n :Outlaw) RETURN n.name"
        );
    }

    #[test]
    fn declines_on_two_distinct_labels() {
        let fx = Fixture::new();
        assert_eq!(
            fx.apply(&NameByLabel, "Who are the bandits and the beasts?"),
            Outcome::NotApplicable
        );
    }

    #[test]
    fn declines_on_count_indicator() {
        let fx = Fixture::new();
        assert_eq!(
            fx.apply(&NameByLabel, "How many bandits are there?"),
            Outcome::NotApplicable
        );
    }

    #[test]
    fn declines_on_relationship_reference() {
        let fx = Fixture::new();
        assert_eq!(
            fx.apply(&NameByLabel, "Which bandits have parents?"),
            Outcome::NotApplicable
        );
    }

    #[test]
    fn declines_on_empty_sequence() {
        let fx = Fixture::new();
        assert_eq!(fx.apply(&NameByLabel, ""), Outcome::NotApplicable);
    }
}
