//! Prefix records: unique symbols and multipliers.
use super::{duplicate, RuleContext};
use crate::model::float_key;
use crate::validation::error::{Category, Diagnostic, DiagnosticKind};

const COLLECTION: &str = "prefix set";

pub(crate) fn check(ctx: &RuleContext<'_, '_>, out: &mut Vec<Diagnostic>) {
    let index = ctx.index;
    for prefix in &ctx.dictionary().prefixes {
        let symbol = prefix.symbol.as_str();
        out.extend(duplicate(Category::Prefix, symbol, "symbol", symbol, index.prefix_symbols.get(&symbol), COLLECTION));
        out.extend(duplicate(
            Category::Prefix,
            symbol,
            "multiplier",
            format!("{:e}", prefix.multiplier),
            index.prefix_multipliers.get(&float_key(prefix.multiplier)),
            COLLECTION,
        ));
        if !(prefix.multiplier.is_finite() && prefix.multiplier > 0.0) {
            out.push(Diagnostic::new(
                Category::Prefix,
                DiagnosticKind::Structure,
                symbol,
                format!("multiplier {} must be a finite positive number", prefix.multiplier),
            ));
        }
    }
    tracing::debug!(records = ctx.dictionary().prefixes.len(), "prefix rules done");
}
