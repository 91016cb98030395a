//! Query AST: the structured result every rule handler populates.
//!
//! Rules never concatenate query text themselves; they build a [`Query`]
//! value and the single `Display` impl here owns the surface syntax. The
//! emitted strings reproduce the legacy output byte-for-byte — including the
//! doubled space in the multi-label MATCH clause — because exact token
//! spacing is part of the observable contract for downstream consumers.

use std::fmt;

/// String-matching condition of a count query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCondition {
    StartsWith,
    EndsWith,
    Contains,
}

impl LetterCondition {
    fn keyword(self) -> &'static str {
        match self {
            LetterCondition::StartsWith => "STARTS WITH",
            LetterCondition::EndsWith => "ENDS WITH",
            LetterCondition::Contains => "CONTAINS",
        }
    }
}

/// What a relationship query projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelatedReturn {
    /// `-> (n<property>) RETURN n`: the related node, filtered by property.
    TargetWithProperty(String),
    /// `RETURN p.property`: a property of the relating node.
    RelatorProperty(String),
    /// `RETURN n.property`: a property of the related node.
    TargetProperty(String),
    /// `RETURN n`: the related nodes themselves.
    Target,
    /// `RETURN p`: the relating nodes themselves.
    Relator,
}

/// A synthesized graph query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `MATCH (n :Label) RETURN n.p1, n.p2` (one label) or the legacy
    /// double-spaced `MATCH (n  :L1 :L2 ) RETURN …` form (several).
    NodeProjection {
        labels: Vec<String>,
        properties: Vec<String>,
    },
    /// `MATCH (n {property :'value'}) RETURN n`
    PropertyFilter { property: String, value: String },
    /// `MATCH (n) RETURN n.property`
    PropertyProjection { property: String },
    /// `MATCH (n) where exists (n.property) RETURN n`
    PropertyExists { property: String },
    /// `MATCH (n) WHERE n.attr COND "V" RETURN COUNT (n.attr)`
    CountLetter {
        attribute: String,
        condition: LetterCondition,
        value: char,
    },
    /// `MATCH (n) WHERE n.attr IS [NOT] NULL RETURN COUNT (n.attr)`
    CountNull { attribute: String, not_null: bool },
    /// `MATCH (p) -[:rel] -> (n…) RETURN …`
    Related {
        relationship: String,
        projection: RelatedReturn,
    },
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::NodeProjection { labels, properties } => {
                let props = properties
                    .iter()
                    .map(|p| format!("n.{p}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                if labels.len() == 1 {
                    write!(f, "MATCH (n :{}) RETURN {props}", labels[0])
                } else {
                    let clause: String = labels.iter().map(|l| format!(" :{l}")).collect();
                    write!(f, "MATCH (n {clause} ) RETURN {props}")
                }
            }
            Query::PropertyFilter { property, value } => {
                write!(f, "MATCH (n {{{property} :'{value}'}}) RETURN n")
            }
            Query::PropertyProjection { property } => {
                write!(f, "MATCH (n) RETURN n.{property}")
            }
            Query::PropertyExists { property } => {
                write!(f, "MATCH (n) where exists (n.{property}) RETURN n")
            }
            Query::CountLetter {
                attribute,
                condition,
                value,
            } => write!(
                f,
                "MATCH (n) WHERE n.{attribute} {} \"{value}\" RETURN COUNT (n.{attribute})",
                condition.keyword()
            ),
            Query::CountNull {
                attribute,
                not_null,
            } => {
                let cond = if *not_null { "IS NOT NULL" } else { "IS NULL" };
                write!(
                    f,
                    "MATCH (n) WHERE n.{attribute} {cond} RETURN COUNT (n.{attribute})"
                )
            }
            Query::Related {
                relationship,
                projection,
            } => {
                let head = format!("MATCH (p) -[:{relationship}] -> ");
                match projection {
                    RelatedReturn::TargetWithProperty(prop) => {
                        write!(f, "{head}(n{prop}) RETURN n")
                    }
                    RelatedReturn::RelatorProperty(prop) => {
                        write!(f, "{head}(n) RETURN p.{prop}")
                    }
                    RelatedReturn::TargetProperty(prop) => {
                        write!(f, "{head}(n) RETURN n.{prop}")
                    }
                    RelatedReturn::Target => write!(f, "{head}(n) RETURN n"),
                    RelatedReturn::Relator => write!(f, "{head}(n) RETURN p"),
                }
            }
        }
    }
}
