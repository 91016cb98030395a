//! # seshat
//!
//! Translates English natural-language questions into Cypher-like graph
//! database queries over a fixed schema of node labels and relationships.
//!
//! ## Architecture
//!
//! - **Schema registry** (`schema`): immutable label/relationship vocabulary
//! - **Tokenizer** (`tokenize`): lowercase → POS-tag → stop-word filter → singularize
//! - **Similarity oracle** (`similarity`): conceptual-relatedness scores for fuzzy schema matching
//! - **Rule handlers** (`rules`): seven independent pattern-match rules over tagged tokens
//! - **Orchestrator** (`translate`): single-pass fan-out collecting every non-declining rule
//!
//! ## Library usage
//!
//! ```
//! use seshat::translate::{Translator, TranslatorConfig};
//!
//! let translator = Translator::new(TranslatorConfig::default()).unwrap();
//! let results = translator.translate_question("What are the names of all the people?");
//! assert_eq!(results[0].query.to_string(), "MATCH (n :Person) RETURN n.name");
//! ```

pub mod error;
pub mod query;
pub mod rules;
pub mod schema;
pub mod similarity;
pub mod tag;
pub mod tagger;
pub mod text;
pub mod tokenize;
pub mod translate;
