//! Dimensional algebra over parsed symbols: canonical forms, dimension
//! expressions and conversion factors.
pub use self::canonical::{
    render_terms, Canonical, Canonicalizer, DIMENSIONLESS_CODE, DIMENSIONLESS_SYMBOL, NON_DIMENSIONAL_CODE,
    NON_DIMENSIONAL_SYMBOL,
};
pub use self::error::DeriveError;
pub use self::factor::{approx_eq, FactorDeriver, DEFAULT_TOLERANCE};

mod canonical;
mod error;
mod factor;
