//! Quantity classes: bases, alternative bases and member units.
use super::{duplicate, RuleContext};
use crate::algebra::{approx_eq, NON_DIMENSIONAL_CODE};
use crate::model::QuantityClass;
use crate::validation::error::{Category, Diagnostic, DiagnosticKind};

pub(crate) fn check(ctx: &RuleContext<'_, '_>, out: &mut Vec<Diagnostic>) {
    for class in &ctx.dictionary().quantity_classes {
        check_class(ctx, class, out);
    }
    tracing::debug!(records = ctx.dictionary().quantity_classes.len(), "quantity class rules done");
}

fn check_class(ctx: &RuleContext<'_, '_>, class: &QuantityClass, out: &mut Vec<Diagnostic>) {
    let index = ctx.index;
    let entity = class.name.as_str();
    let diag = |kind, message: String| Diagnostic::new(Category::Class, kind, entity, message);
    let base = class.base_for_conversion.as_str();
    let alternative = class.alternative_base.as_deref();
    let is_member = |symbol: &str| class.member_units.iter().any(|m| m == symbol);

    out.extend(duplicate(Category::Class, entity, "name", entity, index.class_names.get(&entity), "quantity class set"));

    if class.member_units.is_empty() {
        out.push(diag(DiagnosticKind::Structure, "memberUnits is empty".to_string()));
    }

    // Bases must exist and be coherent SI units.
    for (field, symbol) in std::iter::once(("baseForConversion", base)).chain(alternative.map(|a| ("alternativeBase", a))) {
        if index.unit(symbol).is_none() {
            out.push(diag(
                DiagnosticKind::Reference,
                format!("{} '{}' is not a unit symbol in the dictionary", field, symbol),
            ));
            continue;
        }
        match ctx.factors.derive(symbol) {
            Ok(factor) if approx_eq(factor, 1.0, ctx.tolerance) => {}
            Ok(factor) => out.push(diag(
                DiagnosticKind::Si,
                format!("{} '{}' is not a coherent SI unit: its conversion factor is {}", field, symbol, factor),
            )),
            Err(err) => out.push(diag(
                DiagnosticKind::Underivable,
                format!("cannot derive the conversion factor of {} '{}': {}", field, symbol, err),
            )),
        }
    }

    if class.dimension == NON_DIMENSIONAL_CODE {
        if let Some(alt) = alternative {
            out.push(diag(
                DiagnosticKind::Dimension,
                format!("a class with dimension '{}' must not declare alternativeBase '{}'", NON_DIMENSIONAL_CODE, alt),
            ));
        }
    } else {
        let sharing = index.class_dimensions.get(&class.dimension.as_str());
        match alternative {
            None if sharing > 1 => out.push(diag(
                DiagnosticKind::Structure,
                format!(
                    "dimension '{}' is shared by {} quantity classes so alternativeBase is required",
                    class.dimension, sharing
                ),
            )),
            Some(alt) if sharing < 2 => out.push(diag(
                DiagnosticKind::Structure,
                format!(
                    "alternativeBase '{}' is only allowed when several quantity classes share dimension '{}'",
                    alt, class.dimension
                ),
            )),
            _ => {}
        }
    }

    if let Some(alt) = alternative {
        if !is_member(alt) {
            out.push(diag(DiagnosticKind::Structure, format!("alternativeBase '{}' is not a memberUnit", alt)));
        }
        if alt == base {
            out.push(diag(
                DiagnosticKind::Structure,
                format!("alternativeBase '{}' repeats baseForConversion", alt),
            ));
        }
    }

    if !is_member(base) && !alternative.is_some_and(is_member) {
        out.push(diag(
            DiagnosticKind::Structure,
            format!("neither baseForConversion '{}' nor alternativeBase is a memberUnit", base),
        ));
    }

    for member in &class.member_units {
        match index.unit(member) {
            None => out.push(diag(
                DiagnosticKind::Reference,
                format!("memberUnit '{}' is not a unit symbol in the dictionary", member),
            )),
            Some(unit) if class.dimension != NON_DIMENSIONAL_CODE && unit.dimension != class.dimension => {
                out.push(diag(
                    DiagnosticKind::Dimension,
                    format!(
                        "memberUnit '{}' has dimension '{}' but the class dimension is '{}'",
                        member, unit.dimension, class.dimension
                    ),
                ))
            }
            Some(_) => {}
        }
    }

    let has_si_member = class.member_units.iter().any(|m| index.unit(m).is_some_and(|u| u.is_si));
    if !class.member_units.is_empty() && !has_si_member {
        out.push(diag(DiagnosticKind::Si, "no memberUnit is flagged as SI".to_string()));
    }

    if alternative.is_none() && index.dimension(&class.dimension).is_none() {
        out.push(diag(
            DiagnosticKind::Dimension,
            format!("dimension '{}' is not declared in the dimension set", class.dimension),
        ));
    }
}
