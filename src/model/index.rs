//! Hash-map lookups over a dictionary snapshot, built once per run.
use super::entities::{Dictionary, Prefix, QuantityClass, Reference, Unit, UnitCategory, UnitDimension};
use crate::symbol::SymbolLookup;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts keyed by a record field, used by the uniqueness rules.
#[derive(Debug, Clone, Default)]
pub struct Counts<K: Eq + Hash> {
    inner: HashMap<K, usize>,
}

impl<K: Eq + Hash> Counts<K> {
    pub fn of(keys: impl IntoIterator<Item = K>) -> Self {
        let mut inner = HashMap::new();
        for key in keys {
            *inner.entry(key).or_insert(0) += 1;
        }
        Self { inner }
    }

    pub fn get(&self, key: &K) -> usize {
        self.inner.get(key).copied().unwrap_or(0)
    }
}

/// Maps an f64 to a hashable key so equal multipliers collide.
pub(crate) fn float_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Read-only index of a [`Dictionary`]. When a key is duplicated the first
/// record wins; the duplication itself is reported by the uniqueness rules.
#[derive(Debug)]
pub struct DictionaryIndex<'a> {
    pub dictionary: &'a Dictionary,
    units: HashMap<&'a str, &'a Unit>,
    classes: HashMap<&'a str, &'a QuantityClass>,
    prefixes: HashMap<&'a str, &'a Prefix>,
    references: HashMap<&'a str, &'a Reference>,
    dimensions: HashMap<&'a str, &'a UnitDimension>,

    pub dimension_names: Counts<&'a str>,
    pub dimension_codes: Counts<&'a str>,
    pub dimension_bases: Counts<&'a str>,
    pub class_names: Counts<&'a str>,
    /// Number of quantity classes declaring each dimension.
    pub class_dimensions: Counts<&'a str>,
    pub unit_symbols: Counts<&'a str>,
    pub unit_names: Counts<&'a str>,
    pub reference_ids: Counts<&'a str>,
    pub prefix_symbols: Counts<&'a str>,
    pub prefix_multipliers: Counts<u64>,
}

fn first_wins<'a, T>(records: &'a [T], key: impl Fn(&'a T) -> &'a str) -> HashMap<&'a str, &'a T> {
    let mut map = HashMap::with_capacity(records.len());
    for record in records {
        map.entry(key(record)).or_insert(record);
    }
    map
}

impl<'a> DictionaryIndex<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        let d = dictionary;
        Self {
            dictionary,
            units: first_wins(&d.units, |u| u.symbol.as_str()),
            classes: first_wins(&d.quantity_classes, |c| c.name.as_str()),
            prefixes: first_wins(&d.prefixes, |p| p.symbol.as_str()),
            references: first_wins(&d.references, |r| r.id.as_str()),
            dimensions: first_wins(&d.dimensions, |x| x.dimension.as_str()),

            dimension_names: Counts::of(d.dimensions.iter().map(|x| x.name.as_str())),
            dimension_codes: Counts::of(d.dimensions.iter().map(|x| x.dimension.as_str())),
            dimension_bases: Counts::of(d.dimensions.iter().map(|x| x.base_for_conversion.as_str())),
            class_names: Counts::of(d.quantity_classes.iter().map(|c| c.name.as_str())),
            class_dimensions: Counts::of(d.quantity_classes.iter().map(|c| c.dimension.as_str())),
            unit_symbols: Counts::of(d.units.iter().map(|u| u.symbol.as_str())),
            unit_names: Counts::of(d.units.iter().map(|u| u.name.as_str())),
            reference_ids: Counts::of(d.references.iter().map(|r| r.id.as_str())),
            prefix_symbols: Counts::of(d.prefixes.iter().map(|p| p.symbol.as_str())),
            prefix_multipliers: Counts::of(d.prefixes.iter().map(|p| float_key(p.multiplier))),
        }
    }

    pub fn unit(&self, symbol: &str) -> Option<&'a Unit> {
        self.units.get(symbol).copied()
    }

    pub fn class(&self, name: &str) -> Option<&'a QuantityClass> {
        self.classes.get(name).copied()
    }

    pub fn prefix(&self, symbol: &str) -> Option<&'a Prefix> {
        self.prefixes.get(symbol).copied()
    }

    pub fn reference(&self, id: &str) -> Option<&'a Reference> {
        self.references.get(id).copied()
    }

    /// The dimension record declaring `code`.
    pub fn dimension(&self, code: &str) -> Option<&'a UnitDimension> {
        self.dimensions.get(code).copied()
    }
}

impl SymbolLookup for DictionaryIndex<'_> {
    fn is_prefix(&self, symbol: &str) -> bool {
        self.prefixes.contains_key(symbol)
    }

    fn unit_category(&self, symbol: &str) -> Option<UnitCategory> {
        self.unit(symbol).map(|u| u.category)
    }

    fn is_terminal_unit(&self, symbol: &str) -> bool {
        self.unit(symbol).is_some_and(Unit::is_terminal)
    }
}
