//! The rule battery, one module per dictionary collection.
//!
//! Each family takes the shared [`RuleContext`] and appends one
//! [`Diagnostic`] per violated instance. Families never stop early.
use super::error::{Category, Diagnostic, DiagnosticKind};
use crate::algebra::{Canonicalizer, FactorDeriver};
use crate::model::{Dictionary, DictionaryIndex};
use crate::symbol::SymbolParser;
use std::fmt::Display;

pub(crate) mod classes;
pub(crate) mod dimensions;
pub(crate) mod integer_codes;
pub(crate) mod mappings;
pub(crate) mod prefixes;
pub(crate) mod references;
pub(crate) mod units;

/// Everything a rule needs, built once per run over one index.
pub(crate) struct RuleContext<'i, 'a> {
    pub index: &'i DictionaryIndex<'a>,
    pub parser: SymbolParser<'i>,
    pub canonicalizer: Canonicalizer<'i, 'a>,
    pub factors: FactorDeriver<'i, 'a>,
    pub tolerance: f64,
}

impl<'i, 'a> RuleContext<'i, 'a> {
    pub fn new(index: &'i DictionaryIndex<'a>, tolerance: f64) -> Self {
        Self {
            index,
            parser: SymbolParser::new(index),
            canonicalizer: Canonicalizer::new(index),
            factors: FactorDeriver::new(index),
            tolerance,
        }
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.index.dictionary
    }
}

/// A rule family: inspects one collection and appends its diagnostics.
pub(crate) type RuleFamily = fn(&RuleContext<'_, '_>, &mut Vec<Diagnostic>);

/// The battery in execution order.
pub(crate) const BATTERY: [(Category, RuleFamily); 8] = [
    (Category::Dimension, dimensions::check),
    (Category::Class, classes::check),
    (Category::Unit, units::check),
    (Category::Reference, references::check),
    (Category::Prefix, prefixes::check),
    (Category::Integer, integer_codes::check),
    (Category::ClassMap, mappings::check_class_mappings),
    (Category::UnitMap, mappings::check_unit_mappings),
];

/// A uniqueness diagnostic when `value` was counted more than once.
pub(crate) fn duplicate(
    category: Category,
    entity: &str,
    field: &str,
    value: impl Display,
    count: usize,
    collection: &str,
) -> Option<Diagnostic> {
    (count > 1).then(|| {
        Diagnostic::new(
            category,
            DiagnosticKind::Uniqueness,
            entity,
            format!("{} '{}' must be unique in the {} but occurs {} times", field, value, collection, count),
        )
    })
}
