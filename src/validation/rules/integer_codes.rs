//! Integer code sets: legacy numeric codes for classes and units.
//!
//! Deprecated entries stay in a set for history; they are exempt from the
//! uniqueness and existence rules.
use super::{duplicate, RuleContext};
use crate::model::{ClassCode, Counts, IntegerCodeSet, UnitCode};
use crate::validation::error::{Category, Diagnostic, DiagnosticKind};

pub(crate) fn check(ctx: &RuleContext<'_, '_>, out: &mut Vec<Diagnostic>) {
    for set in &ctx.dictionary().integer_code_sets {
        check_class_codes(ctx, set, out);
        check_unit_codes(ctx, set, out);
    }
    tracing::debug!(sets = ctx.dictionary().integer_code_sets.len(), "integer code rules done");
}

fn active<'s, T>(codes: &'s [T], deprecated: impl Fn(&T) -> bool) -> impl Iterator<Item = &'s T> {
    codes.iter().filter(move |c| !deprecated(c))
}

fn check_class_codes(ctx: &RuleContext<'_, '_>, set: &IntegerCodeSet, out: &mut Vec<Diagnostic>) {
    let index = ctx.index;
    let scope = format!("{}/classCode", set.name);
    let collection = format!("classCode list of '{}'", set.name);
    let deprecated = |c: &ClassCode| c.deprecated;
    let terms = Counts::of(active(&set.class_codes, deprecated).map(|c| c.term.as_str()));
    let codes = Counts::of(active(&set.class_codes, deprecated).map(|c| c.code));

    for entry in active(&set.class_codes, deprecated) {
        let term = entry.term.as_str();
        let diag = |kind, message: String| Diagnostic::new(Category::Integer, kind, term, message).in_scope(&scope);

        for dupe in [
            duplicate(Category::Integer, term, "term", term, terms.get(&term), &collection),
            duplicate(Category::Integer, term, "code", entry.code, codes.get(&entry.code), &collection),
        ]
        .into_iter()
        .flatten()
        {
            out.push(dupe.in_scope(&scope));
        }

        let class = index.class(term);
        if class.is_none() {
            out.push(diag(DiagnosticKind::Reference, format!("term '{}' does not name a quantity class", term)));
        }

        if let Some(unit) = &entry.unit {
            match (index.unit(unit), class) {
                (None, _) => out.push(diag(
                    DiagnosticKind::Reference,
                    format!("unit '{}' is not a unit symbol in the dictionary", unit),
                )),
                (Some(_), Some(class)) if !class.member_units.contains(unit) => out.push(diag(
                    DiagnosticKind::Reference,
                    format!("unit '{}' is not a memberUnit of quantity class '{}'", unit, class.name),
                )),
                _ => {}
            }
        }

        if let Some(code) = entry.unit_code {
            match set.unit_codes.iter().find(|u| u.code == code) {
                None => out.push(diag(
                    DiagnosticKind::Reference,
                    format!("unitCode {} is not declared in set '{}'", code, set.name),
                )),
                Some(declared) => {
                    if let Some(unit) = entry.unit.as_ref().filter(|u| **u != declared.term) {
                        out.push(diag(
                            DiagnosticKind::Reference,
                            format!("unitCode {} stands for '{}' but unit is '{}'", code, declared.term, unit),
                        ));
                    }
                }
            }
        }
    }
}

fn check_unit_codes(ctx: &RuleContext<'_, '_>, set: &IntegerCodeSet, out: &mut Vec<Diagnostic>) {
    let scope = format!("{}/unitCode", set.name);
    let collection = format!("unitCode list of '{}'", set.name);
    let deprecated = |c: &UnitCode| c.deprecated;
    let terms = Counts::of(active(&set.unit_codes, deprecated).map(|c| c.term.as_str()));
    let codes = Counts::of(active(&set.unit_codes, deprecated).map(|c| c.code));

    for entry in active(&set.unit_codes, deprecated) {
        let term = entry.term.as_str();
        let dupes = [
            duplicate(Category::Integer, term, "term", term, terms.get(&term), &collection),
            duplicate(Category::Integer, term, "code", entry.code, codes.get(&entry.code), &collection),
        ];
        out.extend(dupes.into_iter().flatten().map(|d| d.in_scope(&scope)));

        if ctx.index.unit(term).is_none() {
            out.push(
                Diagnostic::new(
                    Category::Integer,
                    DiagnosticKind::Reference,
                    term,
                    format!("term '{}' is not a unit symbol in the dictionary", term),
                )
                .in_scope(&scope),
            );
        }
    }
}
