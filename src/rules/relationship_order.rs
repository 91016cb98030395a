//! Relationship traversal: "who has parents", "who likes something".
//!
//! The most heuristic handler in the crate. It keys on a token whose plural
//! matches a registry relationship, then runs a trigram scan to decide which
//! side of the edge the question is about and whether a property of that
//! side was named. Tie-breaks between overlapping trigram patterns follow a
//! fixed check order; the only hard guarantee is that the same sequence
//! always produces the same outcome.

use crate::query::{Query, RelatedReturn};
use crate::tag::{TaggedToken, NOUN_TAGS, WH_PRONOUN_TAGS};
use crate::text::pluralize;

use super::{word_in, Outcome, Rule, RuleContext};

const ALL_EVERY: &[&str] = &["all", "every"];
/// Possession markers, including the singularizer's clipped "has".
const HAS_HAVE: &[&str] = &["has", "have", "ha", "with"];

/// Projects one side of a relationship edge, optionally through a property.
pub struct RelationshipOrder;

impl Rule for RelationshipOrder {
    fn name(&self) -> &'static str {
        "relationship-order"
    }

    fn apply(&self, cx: &RuleContext<'_>, tags: &[TaggedToken]) -> Outcome {
        // A token relates if its plural names a registry relationship; a
        // token that does not relate may instead name a property. Last
        // occurrence wins in both cases.
        let mut relationship = None;
        let mut property: Option<String> = None;
        for token in tags {
            if let Some(def) = cx.schema.relationship(&pluralize(&token.word)) {
                relationship = Some((token.word.clone(), def.name.clone()));
            } else if cx.schema.is_property(&token.word) {
                property = Some(token.word.clone());
            }
        }
        let Some((rel_word, rel_name)) = relationship else {
            return Outcome::NotApplicable;
        };

        let mut target: Option<String> = None;
        let mut relator_property = false;
        let mut related_property = false;

        for tri in tags.windows(3) {
            let w = |i: usize| tri[i].word.as_str();
            let noun = |i: usize| NOUN_TAGS.contains(&tri[i].tag.as_str());
            let wh = |i: usize| WH_PRONOUN_TAGS.contains(&tri[i].tag.as_str());
            let is_rel = |i: usize| w(i) == rel_word;
            let is_prop = |i: usize| property.as_deref() == Some(w(i));

            if (is_prop(0) && noun(1) && is_rel(2)) || (is_rel(0) && noun(1) && is_prop(2)) {
                target = Some(w(1).to_string());
            } else if noun(0) && is_rel(1) && is_prop(2) {
                target = Some(w(0).to_string());
            } else if wh(0) && is_rel(1) && noun(2) {
                target = Some(w(2).to_string());
            } else if wh(0) && noun(1) && is_rel(2) {
                target = Some(w(1).to_string());
            } else if is_prop(0) && word_in(w(1), ALL_EVERY) && is_rel(2) {
                relator_property = true;
            }

            if noun(0) && (word_in(w(1), HAS_HAVE) || wh(1)) && is_rel(2) {
                related_property = true;
            } else if wh(0) && word_in(w(1), HAS_HAVE) && is_rel(2) {
                related_property = true;
            } else if is_rel(0) && word_in(w(1), HAS_HAVE) && wh(2) {
                related_property = true;
            } else if (wh(0) || noun(0)) && is_rel(1) && noun(2) {
                related_property = true;
            }

            // Indefinite pronouns are not real targets.
            if matches!(target.as_deref(), Some("something" | "anything")) {
                target = None;
            }
        }

        let projection = match (target, property, relator_property, related_property) {
            (None, Some(prop), false, false) => RelatedReturn::TargetWithProperty(prop),
            (None, Some(prop), true, _) => RelatedReturn::RelatorProperty(prop),
            (None, Some(prop), false, true) => RelatedReturn::TargetProperty(prop),
            (None, None, false, true) => RelatedReturn::Target,
            (None, None, false, false) => RelatedReturn::Relator,
            // A named target, or a relator-property request with no
            // property resolved: no well-formed query. Fail closed.
            _ => return Outcome::NotApplicable,
        };

        Outcome::Matched(Query::Related {
            relationship: rel_name,
            projection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Fixture;
    use super::*;

    #[test]
    fn possession_projects_the_related_node() {
        let fx = Fixture::new();
        assert_eq!(
            fx.expect_query(&RelationshipOrder, "Who has parents?"),
            "MATCH (p) -[:parents] -> (n) RETURN n"
        );
    }

    #[test]
    fn property_of_the_related_node() {
        let fx = Fixture::new();
        assert_eq!(
            fx.expect_query(&RelationshipOrder, "What are the names of people with parents?"),
            "MATCH (p) -[:parents] -> (n) RETURN n.name"
        );
    }

    #[test]
    fn property_of_the_relating_node() {
        let fx = Fixture::new();
        assert_eq!(
            fx.expect_query(&RelationshipOrder, "What are the names of all the parents?"),
            "MATCH (p) -[:parents] -> (n) RETURN p.name"
        );
    }

    #[test]
    fn bare_relationship_projects_the_relator() {
        let fx = Fixture::new();
        assert_eq!(
            fx.expect_query(&RelationshipOrder, "Who likes something?"),
            "MATCH (p) -[:likes] -> (n) RETURN p"
        );
    }

    #[test]
    fn property_without_possession_filters_the_related_node() {
        let fx = Fixture::new();
        assert_eq!(
            fx.expect_query(&RelationshipOrder, "What are the names that everyone likes?"),
            "MATCH (p) -[:likes] -> (nname) RETURN n"
        );
    }

    #[test]
    fn declines_without_relationship_word() {
        let fx = Fixture::new();
        assert_eq!(
            fx.apply(&RelationshipOrder, "What are the names of all the people?"),
            Outcome::NotApplicable
        );
        assert_eq!(fx.apply(&RelationshipOrder, ""), Outcome::NotApplicable);
    }

    #[test]
    fn same_sequence_same_outcome() {
        let fx = Fixture::new();
        let a = fx.apply(&RelationshipOrder, "Who has parents?");
        let b = fx.apply(&RelationshipOrder, "Who has parents?");
        assert_eq!(a, b);
    }
}
