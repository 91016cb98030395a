//! Bare-property browsing: "show me all the species that are dogs".
//!
//! This rule is for questions that name a property rather than a label; any
//! token that exactly denotes a label or relationship means a different rule
//! owns the question, so it declines. The scan works over a rewritten copy
//! of the sequence built in a single forward pass — the sequence handed in
//! is never mutated.

use crate::query::Query;
use crate::tag::{TaggedToken, LINKER_TAGS, NOUN_OR_CD_TAGS};

use super::{word_in, Outcome, Rule, RuleContext};

const ALL_EVERY: &[&str] = &["all", "every"];
/// Linking verbs, including the singularizer's clipped forms of "has"/"is".
const HAS_HAVE_IS: &[&str] = &["has", "ha", "have", "is", "i"];

/// Lists nodes that carry a property, optionally filtered by a subtype value.
pub struct ListWithProperty;

impl Rule for ListWithProperty {
    fn name(&self) -> &'static str {
        "list-with-property"
    }

    fn apply(&self, cx: &RuleContext<'_>, tags: &[TaggedToken]) -> Outcome {
        if tags.iter().any(|t| cx.schema.is_schema_word(&t.word)) {
            return Outcome::NotApplicable;
        }

        // Rewrite pass: "named" reads as the property "name"; "list" reads as
        // a verb so the n-gram scan does not take it for a noun.
        let mut property: Option<String> = None;
        let mut scan: Vec<TaggedToken> = Vec::with_capacity(tags.len());
        for token in tags {
            if property.is_none() && token.word == "named" {
                property = Some("name".to_string());
                scan.push(TaggedToken::new("name", "NN"));
            } else if token.word == "list" {
                scan.push(TaggedToken::new("list", "VB"));
            } else {
                scan.push(token.clone());
            }
        }

        if property.is_none() {
            property = scan
                .iter()
                .find(|t| cx.schema.is_property(&t.word))
                .map(|t| t.word.clone());
        }
        let Some(property) = property else {
            return Outcome::NotApplicable;
        };

        let mut subtype: Option<String> = None;
        let mut node_is_property = false;

        for tri in scan.windows(3) {
            let noun2 = NOUN_OR_CD_TAGS.contains(&tri[2].tag.as_str());
            if word_in(&tri[0].word, ALL_EVERY) && tri[1].word == property && noun2 {
                subtype = Some(tri[2].word.clone());
            } else if word_in(&tri[0].word, ALL_EVERY)
                && NOUN_OR_CD_TAGS.contains(&tri[1].tag.as_str())
                && tri[2].word == property
            {
                subtype = Some(tri[1].word.clone());
            } else if tri[0].word == property
                && LINKER_TAGS.contains(&tri[1].tag.as_str())
                && noun2
            {
                subtype = Some(tri[2].word.clone());
            }
        }

        for bi in scan.windows(2) {
            if bi[0].word == property && NOUN_OR_CD_TAGS.contains(&bi[1].tag.as_str()) {
                subtype = Some(bi[1].word.clone());
            } else if !NOUN_OR_CD_TAGS.contains(&bi[0].tag.as_str())
                && !word_in(&bi[0].word, HAS_HAVE_IS)
                && scan.len() < 5
                && bi[1].word == property
            {
                node_is_property = true;
            }
        }

        match (subtype, node_is_property) {
            (Some(value), false) => Outcome::Matched(Query::PropertyFilter { property, value }),
            (None, true) => Outcome::Matched(Query::PropertyProjection { property }),
            (None, false) => Outcome::Matched(Query::PropertyExists { property }),
            (Some(_), true) => Outcome::NotApplicable,
        }
    }
}
