//! A small, internally consistent dictionary shared by unit tests.
//!
//! `sample_dictionary()` passes every rule; tests break one thing and check
//! the diagnostics that come out.
use crate::model::*;
use crate::validation::{Diagnostic, RuleContext, RuleFamily};

pub(crate) fn prefix(symbol: &str, name: &str, multiplier: f64) -> Prefix {
    Prefix { symbol: symbol.into(), name: name.into(), multiplier, common_name: None }
}

/// A unit that is its own base.
pub(crate) fn terminal(symbol: &str, name: &str, category: UnitCategory, is_si: bool, dimension: &str) -> Unit {
    Unit {
        symbol: symbol.into(),
        name: name.into(),
        category,
        is_si,
        dimension: dimension.into(),
        ..Default::default()
    }
}

/// A non-SI unit converting to `base` by `b / c`.
pub(crate) fn scaled(
    symbol: &str,
    name: &str,
    category: UnitCategory,
    base: &str,
    b: f64,
    c: f64,
    dimension: &str,
) -> Unit {
    Unit {
        symbol: symbol.into(),
        name: name.into(),
        category,
        base_unit: Some(base.into()),
        conversion: Some(AffineConversion::scale(b, c)),
        dimension: dimension.into(),
        ..Default::default()
    }
}

pub(crate) fn dimension(name: &str, code: &str, base: &str, canonical: &str) -> UnitDimension {
    UnitDimension {
        name: name.into(),
        dimension: code.into(),
        base_for_conversion: base.into(),
        canonical_unit: canonical.into(),
        description: None,
    }
}

pub(crate) fn class(name: &str, dimension: &str, base: &str, alternative: Option<&str>, members: &[&str]) -> QuantityClass {
    QuantityClass {
        name: name.into(),
        dimension: dimension.into(),
        representative_unit: None,
        base_for_conversion: base.into(),
        alternative_base: alternative.map(Into::into),
        member_units: members.iter().map(|m| m.to_string()).collect(),
        description: None,
    }
}

pub(crate) fn mapping(from: &str, to: Option<&str>) -> Mapping {
    Mapping { maps_from: from.into(), maps_to: to.map(Into::into) }
}

pub(crate) fn unit_mut<'d>(dictionary: &'d mut Dictionary, symbol: &str) -> &'d mut Unit {
    dictionary.units.iter_mut().find(|u| u.symbol == symbol).expect("no such unit")
}

/// Runs one rule family over `dictionary` with the default tolerance.
pub(crate) fn run_family(dictionary: &Dictionary, family: RuleFamily) -> Vec<Diagnostic> {
    let index = DictionaryIndex::new(dictionary);
    let ctx = RuleContext::new(&index, crate::algebra::DEFAULT_TOLERANCE);
    let mut out = Vec::new();
    family(&ctx, &mut out);
    out
}

pub(crate) fn sample_dictionary() -> Dictionary {
    use UnitCategory::*;

    let mut ft = scaled("ft", "foot", Atom, "m", 0.3048, 1.0, "L");
    ft.is_exact = true;
    ft.conversion_ref = Some("R1".into());

    let mut litre = scaled("L", "litre", Atom, "m3", 0.001, 1.0, "L3");
    litre.underlying_def = Some("0.001 m3".into());

    let mut deg_f = scaled("degF", "degree Fahrenheit", Atom, "K", 5.0, 9.0, "K");
    if let Some(conversion) = deg_f.conversion.as_mut() {
        conversion.a = 2298.35;
    }

    let units = vec![
        terminal("m", "metre", Atom, true, "L"),
        terminal("kg", "kilogram", Prefixed, true, "M"),
        scaled("g", "gram", Atom, "kg", 0.001, 1.0, "M"),
        terminal("s", "second", Atom, true, "T"),
        terminal("K", "kelvin", Atom, true, "K"),
        terminal("Euc", "euclid", Atom, true, "1"),
        terminal("dB", "decibel", Atom, false, "none"),
        terminal("kg.m/s2", "kilogram metre per second squared", Derived, true, "L.M/T2"),
        scaled("N", "newton", Atom, "kg.m/s2", 1.0, 1.0, "L.M/T2"),
        terminal("N.m", "newton metre", Derived, true, "L2.M/T2"),
        scaled("J", "joule", Atom, "N.m", 1.0, 1.0, "L2.M/T2"),
        terminal("J/s", "joule per second", Derived, true, "L2.M/T3"),
        scaled("W", "watt", Atom, "J/s", 1.0, 1.0, "L2.M/T3"),
        terminal("N/m2", "newton per square metre", Derived, true, "M/(L.T2)"),
        scaled("Pa", "pascal", Atom, "N/m2", 1.0, 1.0, "M/(L.T2)"),
        scaled("kPa", "kilopascal", Prefixed, "Pa", 1000.0, 1.0, "M/(L.T2)"),
        ft,
        terminal("m3", "cubic metre", Derived, true, "L3"),
        scaled("ft3", "cubic foot", Derived, "m3", 0.028316846592, 1.0, "L3"),
        litre,
        scaled("h", "hour", Atom, "s", 3600.0, 1.0, "T"),
        deg_f,
        scaled("Btu", "British thermal unit", Atom, "J", 1055.05585262, 1.0, "L2.M/T2"),
        scaled("Btu/h", "British thermal unit per hour", Derived, "W", 1055.05585262, 3600.0, "L2.M/T3"),
        terminal("m/s", "metre per second", Derived, true, "L/T"),
        scaled("ft/s", "foot per second", Derived, "m/s", 0.3048, 1.0, "L/T"),
    ];

    Dictionary {
        dimensions: vec![
            dimension("length", "L", "m", "m"),
            dimension("mass", "M", "kg", "kg"),
            dimension("time", "T", "s", "s"),
            dimension("temperature", "K", "K", "K"),
            dimension("dimensionless", "1", "Euc", "Euc"),
            dimension("volume", "L3", "m3", "m3"),
            dimension("force", "L.M/T2", "N", "kg.m/s2"),
            dimension("pressure", "M/(L.T2)", "Pa", "kg/(m.s2)"),
            dimension("energy", "L2.M/T2", "J", "kg.m2/s2"),
            dimension("power", "L2.M/T3", "W", "kg.m2/s3"),
            dimension("velocity", "L/T", "m/s", "m/s"),
        ],
        quantity_classes: vec![
            class("length", "L", "m", None, &["m", "ft"]),
            class("mass", "M", "kg", None, &["kg", "g"]),
            class("time", "T", "s", None, &["s", "h"]),
            class("thermodynamic temperature", "K", "K", None, &["K", "degF"]),
            class("dimensionless", "1", "Euc", None, &["Euc"]),
            class("volume", "L3", "m3", None, &["m3", "ft3", "L"]),
            class("force", "L.M/T2", "N", None, &["N", "kg.m/s2"]),
            class("pressure", "M/(L.T2)", "Pa", None, &["Pa", "kPa", "N/m2"]),
            class("energy", "L2.M/T2", "J", Some("N.m"), &["J", "Btu", "N.m"]),
            class("moment of force", "L2.M/T2", "N.m", Some("J"), &["N.m", "J"]),
            class("power", "L2.M/T3", "W", None, &["W", "Btu/h", "J/s"]),
            class("velocity", "L/T", "m/s", None, &["m/s", "ft/s"]),
        ],
        units,
        references: vec![
            Reference { id: "R1".into(), description: "NIST SP 811".into() },
            Reference { id: "R2".into(), description: "ISO 80000-1".into() },
        ],
        prefixes: vec![
            prefix("k", "kilo", 1e3),
            prefix("m", "milli", 1e-3),
            prefix("c", "centi", 1e-2),
            Prefix { common_name: Some("million".into()), ..prefix("M", "mega", 1e6) },
            prefix("h", "hecto", 1e2),
        ],
        integer_code_sets: vec![IntegerCodeSet {
            name: "legacy".into(),
            class_codes: vec![
                ClassCode { term: "length".into(), code: 1, unit: Some("m".into()), unit_code: Some(10), deprecated: false },
                ClassCode { term: "volume".into(), code: 2, unit: Some("m3".into()), unit_code: Some(11), deprecated: false },
            ],
            unit_codes: vec![
                UnitCode { term: "m".into(), code: 10, deprecated: false },
                UnitCode { term: "m3".into(), code: 11, deprecated: false },
                UnitCode { term: "ft".into(), code: 12, deprecated: false },
            ],
        }],
        class_mapping_sets: vec![MappingSet {
            name: "v1".into(),
            mappings: vec![mapping("len", Some("length")), mapping("obsolete", None)],
        }],
        unit_mapping_sets: vec![MappingSet {
            name: "v1".into(),
            mappings: vec![mapping("meter", Some("m")), mapping("cuft", Some("ft3"))],
        }],
    }
}
