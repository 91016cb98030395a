//! Translator facade: top-level API for question-to-query translation.
//!
//! The `Translator` owns the schema registry, the similarity oracle and the
//! tokenizer, and fans each tagged token sequence out to every rule handler
//! exactly once. This is a single-pass fan-out, not a pipeline: handlers
//! never see each other's output, and zero or several of them may match the
//! same question. The caller decides how to present ambiguity.

use crate::error::SeshatResult;
use crate::query::Query;
use crate::rules::{
    CountLetter, CountNull, LabelProperty, ListWithProperty, MultiLabel, NameByLabel, Outcome,
    RelationshipOrder, Rule, RuleContext,
};
use crate::schema::SchemaRegistry;
use crate::similarity::{SeededOracle, SimilarityOracle};
use crate::tag::TaggedToken;
use crate::tokenize::Tokenizer;

/// Configuration for the translator.
pub struct TranslatorConfig {
    /// Label/relationship vocabulary of the target database.
    pub schema: SchemaRegistry,
    /// Word-sense relatedness oracle.
    pub oracle: Box<dyn SimilarityOracle + Send + Sync>,
    /// Question tokenizer.
    pub tokenizer: Tokenizer,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            schema: SchemaRegistry::outlaw_demo(),
            oracle: Box::new(SeededOracle::new()),
            tokenizer: Tokenizer::new(),
        }
    }
}

/// One query produced by one rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    /// Name of the rule that produced the query.
    pub rule: &'static str,
    pub query: Query,
}

/// The question-to-query translator.
///
/// Construct once, translate many times: every translation call is
/// independent and the translator holds no mutable state.
pub struct Translator {
    config: TranslatorConfig,
    rules: Vec<Box<dyn Rule>>,
}

impl Translator {
    /// Create a translator with the full rule set, in fixed registration
    /// order. The order is part of the output contract: results come back
    /// sorted by it.
    pub fn new(config: TranslatorConfig) -> SeshatResult<Self> {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(LabelProperty),
            Box::new(ListWithProperty),
            Box::new(MultiLabel),
            Box::new(NameByLabel),
            Box::new(CountLetter),
            Box::new(CountNull),
            Box::new(RelationshipOrder),
        ];
        tracing::info!(
            labels = config.schema.labels().len(),
            relationships = config.schema.relationships().len(),
            rules = rules.len(),
            "initializing translator"
        );
        Ok(Self { config, rules })
    }

    /// The schema the translator answers against.
    pub fn schema(&self) -> &SchemaRegistry {
        &self.config.schema
    }

    /// Normalize a raw question and translate it.
    pub fn translate_question(&self, question: &str) -> Vec<Translation> {
        let tags = self.config.tokenizer.normalize(question);
        self.translate(&tags)
    }

    /// Fan a tagged token sequence out to every rule and collect the
    /// matches. An empty result list is a valid answer, not an error.
    pub fn translate(&self, tags: &[TaggedToken]) -> Vec<Translation> {
        let cx = RuleContext {
            schema: &self.config.schema,
            oracle: self.config.oracle.as_ref(),
        };

        let mut results = Vec::new();
        for rule in &self.rules {
            match rule.apply(&cx, tags) {
                Outcome::Matched(query) => {
                    tracing::debug!(rule = rule.name(), query = %query, "rule matched");
                    results.push(Translation {
                        rule: rule.name(),
                        query,
                    });
                }
                Outcome::NotApplicable => {
                    tracing::trace!(rule = rule.name(), "rule declined");
                }
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> Translator {
        Translator::new(TranslatorConfig::default()).unwrap()
    }

    fn queries(t: &Translator, question: &str) -> Vec<String> {
        t.translate_question(question)
            .into_iter()
            .map(|r| r.query.to_string())
            .collect()
    }

    #[test]
    fn single_label_question() {
        let t = translator();
        assert_eq!(
            queries(&t, "What are the names of all the people?"),
            ["MATCH (n :Person) RETURN n.name"]
        );
    }

    #[test]
    fn results_carry_the_rule_name() {
        let t = translator();
        let results = t.translate_question("Who has parents?");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].rule, "relationship-order");
    }

    #[test]
    fn ambiguous_question_yields_several_results() {
        let t = translator();
        let qs = queries(&t, "How many names start with J?");
        assert!(qs.contains(&"MATCH (n) WHERE n.name STARTS WITH \"J\" RETURN COUNT (n.name)".to_string()));
    }

    #[test]
    fn empty_input_yields_empty_result_list() {
        let t = translator();
        assert!(t.translate_question("").is_empty());
        assert!(t.translate(&[]).is_empty());
    }

    #[test]
    fn results_follow_registration_order() {
        let t = translator();
        let results = t.translate_question("How many names start with J?");
        let order: Vec<&str> = results.iter().map(|r| r.rule).collect();
        let mut sorted = order.clone();
        sorted.sort_by_key(|name| {
            [
                "label-property",
                "list-with-property",
                "multi-label",
                "name-by-label",
                "count-letter",
                "count-null",
                "relationship-order",
            ]
            .iter()
            .position(|r| r == name)
        });
        assert_eq!(order, sorted);
    }
}
