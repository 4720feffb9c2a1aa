//! Diagnostics produced by the rule battery and the one fatal dictionary error.
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The collection a diagnostic belongs to. Variants are declared in
/// execution order, so sorting by category keeps report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "DIMENSION")]
    Dimension,
    #[serde(rename = "CLASS")]
    Class,
    #[serde(rename = "UNIT")]
    Unit,
    #[serde(rename = "REFERENCE")]
    Reference,
    #[serde(rename = "PREFIX")]
    Prefix,
    #[serde(rename = "INTEGER")]
    Integer,
    #[serde(rename = "CLASS-MAP")]
    ClassMap,
    #[serde(rename = "UNIT-MAP")]
    UnitMap,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Dimension,
        Category::Class,
        Category::Unit,
        Category::Reference,
        Category::Prefix,
        Category::Integer,
        Category::ClassMap,
        Category::UnitMap,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Category::Dimension => "DIMENSION",
            Category::Class => "CLASS",
            Category::Unit => "UNIT",
            Category::Reference => "REFERENCE",
            Category::Prefix => "PREFIX",
            Category::Integer => "INTEGER",
            Category::ClassMap => "CLASS-MAP",
            Category::UnitMap => "UNIT-MAP",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What kind of assertion failed, for programmatic filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A key occurs more than once in its collection.
    Uniqueness,
    /// A field names a record that does not exist.
    Reference,
    /// An SI flag or coherence requirement is violated.
    Si,
    /// A record is internally inconsistent (shape, names, required fields).
    Structure,
    /// A declared dimension disagrees with the derived one.
    Dimension,
    /// A declared conversion factor disagrees with the derived one.
    Factor,
    /// A canonical form or factor could not be derived at all.
    Underivable,
    /// A mapping points at nothing.
    Mapping,
}

/// One violated assertion on one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: Category,
    pub kind: DiagnosticKind,
    /// The offending record's identifying key (symbol, name, ID, term...).
    pub entity: String,
    /// Set name or sub-collection for records that live inside a set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(category: Category, kind: DiagnosticKind, entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self { category, kind, entity: entity.into(), scope: None, message: message.into() }
    }

    pub fn in_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Some(scope) => write!(f, "[{}] {} ({}): {}", self.category, self.entity, scope, self.message),
            None => write!(f, "[{}] {}: {}", self.category, self.entity, self.message),
        }
    }
}

/// Dictionary defects that make running the rule battery meaningless.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("cyclic unit definitions: {}", format_cycles(.cycles))]
    CyclicDefinition { cycles: Vec<Vec<String>> },
}

fn format_cycles(cycles: &[Vec<String>]) -> String {
    cycles.iter().map(|c| format!("[{}]", c.join(", "))).collect::<Vec<_>>().join(", ")
}
