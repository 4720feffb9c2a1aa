//! Reading unit symbols: lexer, parser and the vocabulary tables they use.
pub use self::error::SymbolError;
pub use self::parser::{has_compound_shape, Component, ParsedSymbol, SymbolParser};

use crate::model::UnitCategory;

pub mod lexer;
mod error;
mod parser;
pub(crate) mod tables;

/// Read-only view of the dictionary vocabulary the parser needs to split
/// words like "kPa" into a prefix and an atom.
pub trait SymbolLookup {
    fn is_prefix(&self, symbol: &str) -> bool;
    fn unit_category(&self, symbol: &str) -> Option<UnitCategory>;
    /// Whether `symbol` is a registered unit that is its own base.
    fn is_terminal_unit(&self, symbol: &str) -> bool;
}

/// An empty vocabulary: words are never split.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl SymbolLookup for NoLookup {
    fn is_prefix(&self, _symbol: &str) -> bool {
        false
    }

    fn unit_category(&self, _symbol: &str) -> Option<UnitCategory> {
        None
    }

    fn is_terminal_unit(&self, _symbol: &str) -> bool {
        false
    }
}
