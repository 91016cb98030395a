//! Schema registry: the label and relationship vocabulary of the target
//! graph database.
//!
//! Constructed once at startup (hardcoded demo schema or a TOML file) and
//! read-only for the life of every translation request. Property lists are
//! ordered: by convention the first property of a label is its "defining
//! property", the implicit answer to "who/what are the X" when no property
//! is named explicitly.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, SchemaError, SeshatResult};
use crate::text::equals_ignore_case;

/// A node label and its ordered property names.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelDef {
    pub name: String,
    pub properties: Vec<String>,
}

/// An edge type and its ordered role-property names.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationshipDef {
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// TOML surface form of a schema file.
#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(rename = "label")]
    labels: Vec<LabelDef>,
    #[serde(rename = "relationship", default)]
    relationships: Vec<RelationshipDef>,
}

/// Immutable label/relationship vocabulary.
///
/// Invariants (checked at construction): label and relationship name sets
/// are disjoint; every label has a non-empty property list.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    labels: Vec<LabelDef>,
    relationships: Vec<RelationshipDef>,
}

impl SchemaRegistry {
    /// Build a registry from label and relationship definitions, validating
    /// the schema invariants.
    pub fn new(
        labels: Vec<LabelDef>,
        relationships: Vec<RelationshipDef>,
    ) -> SeshatResult<Self> {
        for (i, label) in labels.iter().enumerate() {
            if label.properties.is_empty() {
                return Err(SchemaError::EmptyPropertyList {
                    label: label.name.clone(),
                }
                .into());
            }
            if labels[..i]
                .iter()
                .any(|other| equals_ignore_case(&other.name, &label.name))
            {
                return Err(SchemaError::DuplicateLabel {
                    label: label.name.clone(),
                }
                .into());
            }
            if relationships
                .iter()
                .any(|rel| equals_ignore_case(&rel.name, &label.name))
            {
                return Err(SchemaError::NameCollision {
                    name: label.name.clone(),
                }
                .into());
            }
        }

        Ok(Self {
            labels,
            relationships,
        })
    }

    /// The hardcoded "Outlaw" demo schema.
    ///
    /// In a live deployment these lists would come from the database itself
    /// (`MATCH (n) RETURN distinct labels(n)` and friends); the demo schema
    /// keeps the translator usable standalone.
    pub fn outlaw_demo() -> Self {
        let labels = vec![
            LabelDef {
                name: "Person".into(),
                properties: vec!["name".into(), "female".into(), "size".into(), "bounty".into()],
            },
            LabelDef {
                name: "Animal".into(),
                properties: vec!["name".into(), "species".into()],
            },
            LabelDef {
                name: "Outlaw".into(),
                properties: vec!["name".into(), "bounty".into(), "size".into()],
            },
        ];
        let relationships = vec![
            RelationshipDef {
                name: "likes".into(),
                roles: vec!["because".into()],
            },
            RelationshipDef {
                name: "dislikes".into(),
                roles: vec!["because".into()],
            },
            RelationshipDef {
                name: "parents".into(),
                roles: vec!["gift".into()],
            },
            RelationshipDef {
                name: "brother".into(),
                roles: vec![],
            },
        ];
        Self::new(labels, relationships).expect("demo schema is valid")
    }

    /// Parse a registry from a TOML document.
    pub fn from_toml_str(text: &str) -> SeshatResult<Self> {
        let file: SchemaFile = toml::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        Self::new(file.labels, file.relationships)
    }

    /// Load a registry from a TOML file.
    pub fn load(path: &Path) -> SeshatResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&text)
    }

    /// All labels, in declaration order.
    pub fn labels(&self) -> &[LabelDef] {
        &self.labels
    }

    /// All relationships, in declaration order.
    pub fn relationships(&self) -> &[RelationshipDef] {
        &self.relationships
    }

    /// Find the label a word exactly denotes (case-insensitive).
    pub fn label(&self, word: &str) -> Option<&LabelDef> {
        self.labels
            .iter()
            .find(|l| equals_ignore_case(&l.name, word))
    }

    /// Find the relationship a word exactly denotes (case-insensitive).
    pub fn relationship(&self, word: &str) -> Option<&RelationshipDef> {
        self.relationships
            .iter()
            .find(|r| equals_ignore_case(&r.name, word))
    }

    /// Whether any label or relationship name equals the word.
    pub fn is_schema_word(&self, word: &str) -> bool {
        self.label(word).is_some() || self.relationship(word).is_some()
    }

    /// Every property name across every label, in label order.
    pub fn all_properties(&self) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .flat_map(|l| l.properties.iter().map(String::as_str))
    }

    /// Whether a word names a property of any label (case-insensitive).
    pub fn is_property(&self, word: &str) -> bool {
        self.all_properties().any(|p| equals_ignore_case(p, word))
    }
}

impl LabelDef {
    /// The defining property: the first listed for the label.
    pub fn defining_property(&self) -> &str {
        &self.properties[0]
    }

    /// Whether a word names one of this label's properties (case-insensitive).
    pub fn has_property(&self, word: &str) -> bool {
        self.properties.iter().any(|p| equals_ignore_case(p, word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_schema_lookups() {
        let schema = SchemaRegistry::outlaw_demo();
        assert_eq!(schema.label("outlaw").unwrap().name, "Outlaw");
        assert_eq!(schema.label("PERSON").unwrap().name, "Person");
        assert!(schema.label("dog").is_none());
        assert_eq!(schema.relationship("parents").unwrap().name, "parents");
        assert!(schema.is_property("bounty"));
        assert!(!schema.is_property("parents"));
    }

    #[test]
    fn defining_property_is_first_listed() {
        let schema = SchemaRegistry::outlaw_demo();
        for label in schema.labels() {
            assert_eq!(label.defining_property(), "name");
        }
    }

    #[test]
    fn empty_property_list_rejected() {
        let result = SchemaRegistry::new(
            vec![LabelDef {
                name: "Ghost".into(),
                properties: vec![],
            }],
            vec![],
        );
        assert!(result.is_err());
    }

    #[test]
    fn label_relationship_collision_rejected() {
        let result = SchemaRegistry::new(
            vec![LabelDef {
                name: "Parents".into(),
                properties: vec!["name".into()],
            }],
            vec![RelationshipDef {
                name: "parents".into(),
                roles: vec![],
            }],
        );
        assert!(result.is_err());
    }

    #[test]
    fn parses_toml_schema() {
        let schema = SchemaRegistry::from_toml_str(
            r#"
            [[label]]
            name = "Movie"
            properties = ["title", "year"]

            [[relationship]]
            name = "acted_in"
            roles = ["role"]
            "#,
        )
        .unwrap();
        assert_eq!(schema.label("movie").unwrap().defining_property(), "title");
        assert!(schema.relationship("acted_in").is_some());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(SchemaRegistry::from_toml_str("label = 3").is_err());
    }
}
