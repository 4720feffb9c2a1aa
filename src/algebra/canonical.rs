//! Canonical symbols and dimension expressions.
//!
//! A symbol is expanded atom by atom through each unit's definition until
//! only terminal units remain, e.g. "kPa" -> "N/m2" -> "kg.m/s2" / "m2",
//! and the surviving exponents are aggregated into
//! `{ kg: 1, m: -1, s: -2 }` which renders as "kg/(m.s2)".
use super::error::DeriveError;
use crate::model::{DictionaryIndex, Unit};
use crate::symbol::SymbolParser;
use std::collections::BTreeMap;

/// Canonical form of a symbol with nothing left after aggregation.
pub const DIMENSIONLESS_SYMBOL: &str = "Euc";
/// Dimension code of a pure number.
pub const DIMENSIONLESS_CODE: &str = "1";
/// Dimension code of a non-dimensional unit such as a logarithmic ratio.
pub const NON_DIMENSIONAL_CODE: &str = "none";
/// Canonical form of anything containing a non-dimensional unit.
pub const NON_DIMENSIONAL_SYMBOL: &str = "0";
/// Largest exponent a symbol can spell.
const MAX_EXPONENT: i32 = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical {
    pub symbol: String,
    pub dimension: String,
}

pub struct Canonicalizer<'i, 'a> {
    index: &'i DictionaryIndex<'a>,
}

impl<'i, 'a> Canonicalizer<'i, 'a> {
    pub fn new(index: &'i DictionaryIndex<'a>) -> Self {
        Self { index }
    }

    pub fn canonicalize(&self, symbol: &str) -> Result<Canonical, DeriveError> {
        // The non-dimensional marker is already canonical.
        if symbol.trim() == NON_DIMENSIONAL_SYMBOL {
            return Terms { non_dimensional: true, ..Terms::default() }.render();
        }
        let mut terms = Terms::default();
        let mut path = Vec::new();
        self.expand(symbol, 1, &mut path, &mut terms)?;
        terms.render()
    }

    /// Expands `symbol` raised to `scale` into `terms`. `path` holds the
    /// units currently being expanded; meeting one again is a cycle.
    fn expand(
        &self,
        symbol: &str,
        scale: i32,
        path: &mut Vec<String>,
        terms: &mut Terms,
    ) -> Result<(), DeriveError> {
        let parsed = SymbolParser::new(self.index).parse(symbol)?;

        for component in &parsed.components {
            let unit = self
                .index
                .unit(&component.atom)
                .ok_or_else(|| DeriveError::UnknownAtom { atom: component.atom.clone() })?;
            let power = component.exponent * scale;

            match unit.definition() {
                None => terms.add(unit, power),
                Some(definition) => {
                    if path.iter().any(|s| *s == unit.symbol) {
                        let mut chain = path.clone();
                        chain.push(unit.symbol.clone());
                        return Err(DeriveError::Cycle { chain });
                    }
                    path.push(unit.symbol.clone());
                    self.expand(definition, power, path, terms)?;
                    path.pop();
                }
            }
        }
        Ok(())
    }
}

/// Exponents of terminal atoms and of their dimension codes.
#[derive(Debug, Default)]
struct Terms {
    atoms: BTreeMap<String, i32>,
    dimensions: BTreeMap<String, i32>,
    non_dimensional: bool,
}

impl Terms {
    fn add(&mut self, unit: &Unit, power: i32) {
        match unit.dimension.as_str() {
            NON_DIMENSIONAL_CODE => self.non_dimensional = true,
            DIMENSIONLESS_CODE => {}
            code => {
                *self.atoms.entry(unit.symbol.clone()).or_insert(0) += power;
                *self.dimensions.entry(code.to_string()).or_insert(0) += power;
            }
        }
    }

    fn render(self) -> Result<Canonical, DeriveError> {
        // A single non-dimensional factor poisons the whole expression.
        if self.non_dimensional {
            return Ok(Canonical {
                symbol: NON_DIMENSIONAL_SYMBOL.to_string(),
                dimension: NON_DIMENSIONAL_CODE.to_string(),
            });
        }
        // Symbols carry a single exponent digit; anything wider would not
        // read back.
        let wide = self.atoms.iter().chain(&self.dimensions).find(|(_, e)| !(-MAX_EXPONENT..=MAX_EXPONENT).contains(*e));
        if let Some((term, &exponent)) = wide {
            return Err(DeriveError::ExponentOutOfRange { term: term.clone(), exponent });
        }
        Ok(Canonical {
            symbol: render_terms(&self.atoms).unwrap_or_else(|| DIMENSIONLESS_SYMBOL.to_string()),
            dimension: render_terms(&self.dimensions).unwrap_or_else(|| DIMENSIONLESS_CODE.to_string()),
        })
    }
}

/// Formats aggregated exponents as "a.b2/(c.d3)". Returns `None` when every
/// exponent cancelled out.
pub fn render_terms(terms: &BTreeMap<String, i32>) -> Option<String> {
    let format_term = |(base, exp): (&String, i32)| {
        if exp == 1 { base.clone() } else { format!("{}{}", base, exp) }
    };

    let numerator: Vec<String> =
        terms.iter().filter(|&(_, &e)| e > 0).map(|(b, &e)| format_term((b, e))).collect();
    let denominator: Vec<String> =
        terms.iter().filter(|&(_, &e)| e < 0).map(|(b, &e)| format_term((b, -e))).collect();

    if numerator.is_empty() && denominator.is_empty() {
        return None;
    }

    let num_str = if numerator.is_empty() { "1".to_string() } else { numerator.join(".") };
    Some(match denominator.len() {
        0 => num_str,
        1 => format!("{}/{}", num_str, denominator[0]),
        _ => format!("{}/({})", num_str, denominator.join(".")),
    })
}
