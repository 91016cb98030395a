//! Rich diagnostic error types for the seshat translator.
//!
//! Translation itself is a total function: a rule either produces a query or
//! declines, and declining is never an error. The types here cover the parts
//! that can genuinely fail — building a schema registry and loading one from
//! a configuration file — with miette `#[diagnostic]` derives so users know
//! exactly what went wrong and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the seshat crate.
#[derive(Debug, Error, Diagnostic)]
pub enum SeshatError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Schema errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum SchemaError {
    #[error("label {label} has an empty property list")]
    #[diagnostic(
        code(seshat::schema::empty_properties),
        help(
            "Every label needs at least one property: the first entry is the \
             \"defining property\" the rules fall back to when a question names \
             no property explicitly. Add a property to this label."
        )
    )]
    EmptyPropertyList { label: String },

    #[error("name {name} is both a label and a relationship")]
    #[diagnostic(
        code(seshat::schema::name_collision),
        help(
            "Label and relationship name sets must be disjoint — the rule \
             handlers decide which family a word belongs to by name alone. \
             Rename one of the two."
        )
    )]
    NameCollision { name: String },

    #[error("duplicate label: {label}")]
    #[diagnostic(
        code(seshat::schema::duplicate_label),
        help("Each label may be declared once. Remove the duplicate entry.")
    )]
    DuplicateLabel { label: String },
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read schema file: {path}")]
    #[diagnostic(
        code(seshat::config::io),
        help("Check that the path exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema file: {message}")]
    #[diagnostic(
        code(seshat::config::parse),
        help(
            "The schema file must be TOML with `[[label]]` tables (fields \
             `name`, `properties`) and `[[relationship]]` tables (fields \
             `name`, `roles`)."
        )
    )]
    Parse { message: String },
}

/// Convenience alias for functions returning seshat results.
pub type SeshatResult<T> = std::result::Result<T, SeshatError>;
