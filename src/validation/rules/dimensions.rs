//! Dimension records: uniqueness and agreement with their base unit.
use super::{duplicate, RuleContext};
use crate::validation::error::{Category, Diagnostic, DiagnosticKind};

const COLLECTION: &str = "dimension set";

pub(crate) fn check(ctx: &RuleContext<'_, '_>, out: &mut Vec<Diagnostic>) {
    let index = ctx.index;

    for record in &ctx.dictionary().dimensions {
        let entity = record.name.as_str();
        let base = record.base_for_conversion.as_str();
        let diag = |kind, message: String| Diagnostic::new(Category::Dimension, kind, entity, message);

        out.extend(duplicate(Category::Dimension, entity, "name", entity, index.dimension_names.get(&entity), COLLECTION));
        out.extend(duplicate(
            Category::Dimension,
            entity,
            "dimension",
            &record.dimension,
            index.dimension_codes.get(&record.dimension.as_str()),
            COLLECTION,
        ));
        out.extend(duplicate(Category::Dimension, entity, "baseForConversion", base, index.dimension_bases.get(&base), COLLECTION));

        if index.unit(base).is_none() {
            out.push(diag(
                DiagnosticKind::Reference,
                format!("baseForConversion '{}' is not a unit symbol in the dictionary", base),
            ));
        }

        match ctx.canonicalizer.canonicalize(base) {
            Ok(canonical) => {
                if canonical.symbol != record.canonical_unit {
                    out.push(diag(
                        DiagnosticKind::Dimension,
                        format!(
                            "canonicalUnit '{}' does not match '{}', the canonical form of baseForConversion '{}'",
                            record.canonical_unit, canonical.symbol, base
                        ),
                    ));
                }
                if canonical.dimension != record.dimension {
                    out.push(diag(
                        DiagnosticKind::Dimension,
                        format!(
                            "dimension '{}' does not match '{}', derived from baseForConversion '{}'",
                            record.dimension, canonical.dimension, base
                        ),
                    ));
                }
            }
            Err(err) => out.push(diag(
                DiagnosticKind::Underivable,
                format!("cannot derive the canonical form of baseForConversion '{}': {}", base, err),
            )),
        }
    }

    tracing::debug!(records = ctx.dictionary().dimensions.len(), "dimension rules done");
}
