//! Failures of canonicalization and factor derivation.
use crate::symbol::SymbolError;
use thiserror::Error;

/// Why a symbol could not be reduced to SI atoms or to a numeric factor.
/// None of these is ever replaced by a default value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    #[error(transparent)]
    Malformed(#[from] SymbolError),
    #[error("'{atom}' is not a unit symbol in the dictionary")]
    UnknownAtom { atom: String },
    #[error("'{prefix}' is not a prefix symbol in the dictionary")]
    UnknownPrefix { prefix: String },
    #[error("unit '{unit}' has a base but no conversion parameters")]
    MissingConversion { unit: String },
    #[error("unit '{unit}' has a non-multiplicative conversion (A or D is not zero)")]
    NonMultiplicative { unit: String },
    #[error("unit '{unit}' has a zero conversion denominator C")]
    ZeroDenominator { unit: String },
    #[error("exponent {exponent} of '{term}' cannot be written as a single digit")]
    ExponentOutOfRange { term: String, exponent: i32 },
    #[error("cyclic unit definition: {}", chain.join(" -> "))]
    Cycle { chain: Vec<String> },
}
