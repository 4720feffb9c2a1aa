//! Reference records.
use super::{duplicate, RuleContext};
use crate::validation::error::{Category, Diagnostic};

pub(crate) fn check(ctx: &RuleContext<'_, '_>, out: &mut Vec<Diagnostic>) {
    for reference in &ctx.dictionary().references {
        let id = reference.id.as_str();
        out.extend(duplicate(Category::Reference, id, "ID", id, ctx.index.reference_ids.get(&id), "reference set"));
    }
    tracing::debug!(records = ctx.dictionary().references.len(), "reference rules done");
}
