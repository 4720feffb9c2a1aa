//! Domain data consulted while reading symbols and names.
//!
//! These are irregularities of the unit vocabulary itself, so they live in
//! tables rather than in parser branches.

/// How the parser must treat a symbol that breaks the usual shape rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SymbolException {
    pub symbol: &'static str,
    /// Digits inside the symbol are part of the atom, not an exponent.
    pub keeps_digits: bool,
    /// The leading letter is not a prefix even when it looks like one.
    pub never_split: bool,
}

pub(crate) const SYMBOL_EXCEPTIONS: &[SymbolException] = &[
    SymbolException { symbol: "inH2O", keeps_digits: true, never_split: true },
    SymbolException { symbol: "cmH2O", keeps_digits: true, never_split: false },
    SymbolException { symbol: "psi", keeps_digits: false, never_split: true },
];

/// Prefixed unit names that elide letters at the prefix/atom boundary.
/// Columns: prefix name, atom name, accepted unit name.
pub(crate) const IRREGULAR_PREFIXED_NAMES: &[(&str, &str, &str)] = &[
    ("mega", "ohm", "megohm"),
    ("kilo", "ohm", "kilohm"),
    ("hecto", "are", "hectare"),
];

fn exception(symbol: &str) -> Option<&'static SymbolException> {
    SYMBOL_EXCEPTIONS.iter().find(|e| e.symbol == symbol)
}

pub(crate) fn keeps_digits(symbol: &str) -> bool {
    exception(symbol).is_some_and(|e| e.keeps_digits)
}

pub(crate) fn never_split(symbol: &str) -> bool {
    exception(symbol).is_some_and(|e| e.never_split)
}

/// The expected name of a prefixed unit.
pub(crate) fn prefixed_name(prefix_name: &str, atom_name: &str) -> String {
    IRREGULAR_PREFIXED_NAMES
        .iter()
        .find(|(p, a, _)| *p == prefix_name && *a == atom_name)
        .map(|(_, _, name)| name.to_string())
        .unwrap_or_else(|| format!("{}{}", prefix_name, atom_name))
}
