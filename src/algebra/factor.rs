//! Multiplicative conversion factors derived from a symbol's components.
use super::error::DeriveError;
use crate::model::DictionaryIndex;
use crate::symbol::{Component, SymbolParser};

/// Relative tolerance used unless the configuration says otherwise.
pub const DEFAULT_TOLERANCE: f64 = 1e-15;

/// Relative comparison used for every factor check.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= tolerance * scale
}

pub struct FactorDeriver<'i, 'a> {
    index: &'i DictionaryIndex<'a>,
}

impl<'i, 'a> FactorDeriver<'i, 'a> {
    pub fn new(index: &'i DictionaryIndex<'a>) -> Self {
        Self { index }
    }

    /// The factor taking a value in `symbol` to its SI-coherent equivalent,
    /// e.g. "ft/s" -> 0.3048 and "1000 m3" -> 1000.
    pub fn derive(&self, symbol: &str) -> Result<f64, DeriveError> {
        let parsed = SymbolParser::new(self.index).parse(symbol)?;

        let mut factor = parsed.multiplier.unwrap_or(1.0);
        for component in &parsed.components {
            let scaled = self.component_factor(component)?.powi(component.exponent.abs());
            if component.from_denominator {
                factor /= scaled;
            } else {
                factor *= scaled;
            }
        }
        Ok(factor)
    }

    /// The declared factor of a single registered unit: 1 for a terminal
    /// unit, otherwise B/C of its multiplicative conversion.
    pub fn unit_factor(&self, symbol: &str) -> Result<f64, DeriveError> {
        let unit = self
            .index
            .unit(symbol)
            .ok_or_else(|| DeriveError::UnknownAtom { atom: symbol.to_string() })?;
        if unit.is_terminal() {
            return Ok(1.0);
        }

        let conversion = unit
            .conversion
            .ok_or_else(|| DeriveError::MissingConversion { unit: unit.symbol.clone() })?;
        if !conversion.is_multiplicative() {
            return Err(DeriveError::NonMultiplicative { unit: unit.symbol.clone() });
        }
        if conversion.c == 0.0 {
            return Err(DeriveError::ZeroDenominator { unit: unit.symbol.clone() });
        }
        Ok(conversion.b / conversion.c)
    }

    fn component_factor(&self, component: &Component) -> Result<f64, DeriveError> {
        let atom = self.unit_factor(&component.atom)?;
        let prefix = match &component.prefix {
            Some(symbol) => self
                .index
                .prefix(symbol)
                .map(|p| p.multiplier)
                .ok_or_else(|| DeriveError::UnknownPrefix { prefix: symbol.clone() })?,
            None => 1.0,
        };
        Ok(prefix * atom)
    }
}
