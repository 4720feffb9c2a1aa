//! Errors raised while reading a unit symbol.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("unit symbol is empty")]
    Empty,
    #[error("malformed symbol '{symbol}' at offset {offset}: {reason}")]
    Malformed { symbol: String, offset: usize, reason: String },
}

impl SymbolError {
    pub(crate) fn malformed(symbol: &str, offset: usize, reason: impl Into<String>) -> Self {
        SymbolError::Malformed { symbol: symbol.to_string(), offset, reason: reason.into() }
    }
}
