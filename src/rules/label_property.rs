//! Single-label property retrieval: "what are the names of all the people".

use crate::query::Query;
use crate::tag::TaggedToken;
use crate::text::equals_ignore_case;

use super::{
    fuzzy_label_references, fuzzy_relationship_references, has_count_indicator, noun_evidence,
    nouns, Outcome, Rule, RuleContext, KEYWORDS,
};

/// Filters nodes by exactly one label and returns the properties asked for.
///
/// Declines when the question references more than one label, references any
/// relationship, carries fewer than two noun-bearing tokens, or asks for a
/// count. The fuzzy label check runs against the oracle rather than the tags
/// because the tagger sometimes mis-tags a plural label noun as a verb
/// participle; the oracle still recognizes it.
pub struct LabelProperty;

impl Rule for LabelProperty {
    fn name(&self) -> &'static str {
        "label-property"
    }

    fn apply(&self, cx: &RuleContext<'_>, tags: &[TaggedToken]) -> Outcome {
        if fuzzy_label_references(cx, tags) > 1 {
            return Outcome::NotApplicable;
        }
        if fuzzy_relationship_references(cx, tags) > 0 {
            return Outcome::NotApplicable;
        }
        if noun_evidence(tags) < 2 {
            return Outcome::NotApplicable;
        }
        if has_count_indicator(tags) {
            return Outcome::NotApplicable;
        }

        let nouns = nouns(tags);

        // Exactly one noun must exactly denote a registry label.
        let mut label = None;
        for noun in &nouns {
            if let Some(def) = cx.schema.label(noun) {
                if label.replace(def).is_some() {
                    return Outcome::NotApplicable;
                }
            }
        }
        let Some(label) = label else {
            return Outcome::NotApplicable;
        };

        // Keywords imply the defining property; nouns name properties
        // explicitly. First-seen order, no duplicates.
        let mut properties: Vec<String> = Vec::new();
        if tags
            .iter()
            .any(|t| KEYWORDS.iter().any(|k| equals_ignore_case(k, &t.word)))
        {
            properties.push(label.defining_property().to_string());
        }
        for noun in &nouns {
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
    fn defining_property_from_keyword() {
        let fx = Fixture::new();
        assert_eq!(
            fx.expect_query(&LabelProperty, "What are the names of all the people?"),
            "MATCH (n :Person) RETURN n.name"
        );
    }

    #[test]
    fn case_insensitive() {
        let fx = Fixture::new();
        for q in [
            "what are the names of all the people?",
            "WHAT ARE THE NAMES OF ALL THE PEOPLE?",
        ] {
            assert_eq!(fx.expect_query(&LabelProperty, q), "MATCH (n :Person) RETURN n.name");
        }
    }

    #[test]
    fn explicit_properties_in_first_seen_order() {
        let fx = Fixture::new();
        assert_eq!(
            fx.expect_query(&LabelProperty, "What are the names and bounties of the outlaws?"),
            "MATCH (n :Outlaw) RETURN n.name, n.bounty"
        );
        assert_eq!(
            fx.expect_query(&LabelProperty, "Who are the outlaws and what are the bounties on them?"),
            "MATCH (n :Outlaw) RETURN n.name, n.bounty"
        );
    }

    #[test]
    fn keyword_each_implies_defining_property() {
        let fx = Fixture::new();
        assert_eq!(
            fx.expect_query(&LabelProperty, "What is the species of each animal?"),
            "MATCH (n :Animal) RETURN n.name, n.species"
        );
        assert_eq!(
            fx.expect_query(&LabelProperty, "What's the bounty on every outlaw?"),
            "MATCH (n :Outlaw) RETURN n.name, n.bounty"
        );
    }

    #[test]
    fn declines_on_count_indicator() {
        let fx = Fixture::new();
        assert_eq!(
            fx.apply(&LabelProperty, "How many names start with J?"),
            Outcome::NotApplicable
        );
    }

    #[test]
    fn declines_on_two_labels() {
        let fx = Fixture::new();
        assert_eq!(
            fx.apply(&LabelProperty, "Who are all the animals and outlaws"),
            Outcome::NotApplicable
        );
    }

    #[test]
    fn declines_on_relationship_reference() {
        let fx = Fixture::new();
        assert_eq!(
            fx.apply(&LabelProperty, "What are the names of people with parents?"),
            Outcome::NotApplicable
        );
    }

    #[test]
    fn declines_on_empty_sequence() {
        let fx = Fixture::new();
        assert_eq!(fx.apply(&LabelProperty, ""), Outcome::NotApplicable);
    }
}
