//! Unit records: symbol shape, references, dimensions and conversion factors.
use super::{duplicate, RuleContext};
use crate::algebra::{approx_eq, NON_DIMENSIONAL_CODE};
use crate::model::{Unit, UnitCategory};
use crate::symbol::{has_compound_shape, tables, ParsedSymbol};
use crate::validation::error::{Category, Diagnostic, DiagnosticKind};

const COLLECTION: &str = "unit set";

pub(crate) fn check(ctx: &RuleContext<'_, '_>, out: &mut Vec<Diagnostic>) {
    for unit in &ctx.dictionary().units {
        check_unit(ctx, unit, out);
    }
    tracing::debug!(records = ctx.dictionary().units.len(), "unit rules done");
}

fn diag(unit: &Unit, kind: DiagnosticKind, message: String) -> Diagnostic {
    Diagnostic::new(Category::Unit, kind, unit.symbol.as_str(), message)
}

fn check_unit(ctx: &RuleContext<'_, '_>, unit: &Unit, out: &mut Vec<Diagnostic>) {
    let index = ctx.index;
    let symbol = unit.symbol.as_str();

    out.extend(duplicate(Category::Unit, symbol, "symbol", symbol, index.unit_symbols.get(&symbol), COLLECTION));
    out.extend(duplicate(Category::Unit, symbol, "name", &unit.name, index.unit_names.get(&unit.name.as_str()), COLLECTION));

    let parsed = match ctx.parser.parse(symbol) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            out.push(diag(unit, DiagnosticKind::Structure, format!("symbol cannot be parsed: {}", err)));
            None
        }
    };

    if has_compound_shape(symbol) && unit.category != UnitCategory::Derived {
        out.push(diag(
            unit,
            DiagnosticKind::Structure,
            format!("symbol is a compound expression but category is '{}' instead of 'derived'", unit.category.as_str()),
        ));
    }

    if (unit.is_si || unit.category != UnitCategory::Derived) && symbol.contains(char::is_whitespace) {
        out.push(diag(
            unit,
            DiagnosticKind::Structure,
            "symbol of an SI, atom or prefixed unit must not contain whitespace".to_string(),
        ));
    }

    if unit.is_si && unit.category == UnitCategory::Atom && !unit.is_terminal() {
        out.push(diag(unit, DiagnosticKind::Si, "a non-base SI unit must not have category 'atom'".to_string()));
    }

    if let Some(base) = &unit.base_unit {
        if index.unit(base).is_none() {
            out.push(diag(
                unit,
                DiagnosticKind::Reference,
                format!("baseUnit '{}' is not a unit symbol in the dictionary", base),
            ));
        }
    }

    if let Some(reference) = &unit.conversion_ref {
        if index.reference(reference).is_none() {
            out.push(diag(
                unit,
                DiagnosticKind::Reference,
                format!("conversionRef '{}' does not name a reference", reference),
            ));
        }
    }

    match (&unit.conversion, &unit.base_unit) {
        (None, Some(base)) if !unit.is_terminal() => out.push(diag(
            unit,
            DiagnosticKind::Factor,
            format!("baseUnit '{}' is declared without conversion parameters", base),
        )),
        (Some(conversion), _) if conversion.c == 0.0 && conversion.d == 0.0 => out.push(diag(
            unit,
            DiagnosticKind::Factor,
            "conversion denominator C + D.x is identically zero".to_string(),
        )),
        _ => {}
    }

    let Some(parsed) = parsed else { return };

    match ctx.canonicalizer.canonicalize(symbol) {
        Ok(canonical) if canonical.dimension != unit.dimension => out.push(diag(
            unit,
            DiagnosticKind::Dimension,
            format!("declared dimension '{}' does not match '{}', derived from the symbol", unit.dimension, canonical.dimension),
        )),
        Ok(_) => {}
        Err(err) => out.push(diag(
            unit,
            DiagnosticKind::Underivable,
            format!("cannot derive the dimension of the symbol: {}", err),
        )),
    }

    check_non_dimensional(ctx, unit, &parsed, out);

    if unit.category == UnitCategory::Prefixed {
        check_prefixed(ctx, unit, out);
    }

    check_factor(ctx, unit, out);
}

/// A symbol with a non-dimensional component makes the whole unit
/// non-dimensional.
fn check_non_dimensional(ctx: &RuleContext<'_, '_>, unit: &Unit, parsed: &ParsedSymbol, out: &mut Vec<Diagnostic>) {
    if unit.dimension == NON_DIMENSIONAL_CODE {
        return;
    }
    let offending = parsed
        .components
        .iter()
        .find(|c| ctx.index.unit(&c.atom).is_some_and(|u| u.dimension == NON_DIMENSIONAL_CODE));
    if let Some(component) = offending {
        out.push(diag(
            unit,
            DiagnosticKind::Dimension,
            format!(
                "component '{}' is non-dimensional so the dimension must be '{}', not '{}'",
                component.token(),
                NON_DIMENSIONAL_CODE,
                unit.dimension
            ),
        ));
    }
}

fn check_prefixed(ctx: &RuleContext<'_, '_>, unit: &Unit, out: &mut Vec<Diagnostic>) {
    let index = ctx.index;
    let decomposed = ctx
        .parser
        .decompose_prefixed(&unit.symbol)
        .and_then(|(p, a)| Some((index.prefix(p)?, index.unit(a)?)));
    let Some((prefix, atom)) = decomposed else {
        out.push(diag(
            unit,
            DiagnosticKind::Structure,
            "prefixed symbol is not a registered prefix followed by a registered atom".to_string(),
        ));
        return;
    };

    let expected = tables::prefixed_name(&prefix.name, &atom.name);
    let common = prefix
        .common_name
        .as_ref()
        .filter(|_| !atom.is_si)
        .map(|common| format!("{} {}", common, atom.name));
    if unit.name != expected && common.as_deref() != Some(unit.name.as_str()) {
        out.push(diag(
            unit,
            DiagnosticKind::Structure,
            format!(
                "name '{}' should be '{}', from prefix '{}' and atom '{}'",
                unit.name, expected, prefix.symbol, atom.symbol
            ),
        ));
    }

    match (ctx.factors.unit_factor(&unit.symbol), ctx.factors.unit_factor(&atom.symbol)) {
        (Ok(declared), Ok(atom_factor)) => {
            let expected = prefix.multiplier * atom_factor;
            if !approx_eq(declared, expected, ctx.tolerance) {
                out.push(diag(
                    unit,
                    DiagnosticKind::Factor,
                    format!(
                        "conversion factor {:e} differs from {:e}, prefix multiplier {:e} times the factor of '{}'",
                        declared, expected, prefix.multiplier, atom.symbol
                    ),
                ));
            }
        }
        (Err(err), _) | (_, Err(err)) => out.push(diag(
            unit,
            DiagnosticKind::Underivable,
            format!("cannot verify the prefixed conversion factor: {}", err),
        )),
    }
}

/// Compares a multiplicative B/C with what the symbol and the underlying
/// definition say.
fn check_factor(ctx: &RuleContext<'_, '_>, unit: &Unit, out: &mut Vec<Diagnostic>) {
    let Some(declared) = unit.conversion.and_then(|c| c.factor()) else { return };

    let mut sources: Vec<(&str, &str)> = Vec::with_capacity(2);
    if unit.category == UnitCategory::Derived {
        sources.push(("symbol", unit.symbol.as_str()));
    }
    if let (Some(definition), Some(_)) = (&unit.underlying_def, &unit.base_unit) {
        sources.push(("underlyingDef", definition.as_str()));
    }

    for (field, expression) in sources {
        match ctx.factors.derive(expression) {
            Ok(derived) if approx_eq(declared, derived, ctx.tolerance) => {}
            Ok(derived) => out.push(diag(
                unit,
                DiagnosticKind::Factor,
                format!(
                    "declared factor {:e} differs from {:e}, derived from {} '{}'",
                    declared, derived, field, expression
                ),
            )),
            Err(err) => out.push(diag(
                unit,
                DiagnosticKind::Underivable,
                format!("cannot derive a conversion factor from {} '{}': {}", field, expression, err),
            )),
        }
    }
}
