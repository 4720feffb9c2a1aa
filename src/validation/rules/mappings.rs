//! Mapping sets translating legacy names to classes and units.
use super::{duplicate, RuleContext};
use crate::model::{Counts, MappingSet};
use crate::validation::error::{Category, Diagnostic, DiagnosticKind};

pub(crate) fn check_class_mappings(ctx: &RuleContext<'_, '_>, out: &mut Vec<Diagnostic>) {
    let index = ctx.index;
    check_sets(&ctx.dictionary().class_mapping_sets, Category::ClassMap, "quantity class", |t| index.class(t).is_some(), out);
}

pub(crate) fn check_unit_mappings(ctx: &RuleContext<'_, '_>, out: &mut Vec<Diagnostic>) {
    let index = ctx.index;
    check_sets(&ctx.dictionary().unit_mapping_sets, Category::UnitMap, "unit", |t| index.unit(t).is_some(), out);
}

fn check_sets(
    sets: &[MappingSet],
    category: Category,
    target_kind: &str,
    exists: impl Fn(&str) -> bool,
    out: &mut Vec<Diagnostic>,
) {
    for set in sets {
        let sources = Counts::of(set.mappings.iter().map(|m| m.maps_from.as_str()));
        let collection = format!("mapping set '{}'", set.name);

        for mapping in &set.mappings {
            let from = mapping.maps_from.as_str();
            if let Some(dupe) = duplicate(category, from, "mapsFrom", from, sources.get(&from), &collection) {
                out.push(dupe.in_scope(&set.name));
            }
            if let Some(target) = mapping.target().filter(|t| !exists(t)) {
                out.push(
                    Diagnostic::new(
                        category,
                        DiagnosticKind::Mapping,
                        from,
                        format!("mapsTo '{}' does not name an existing {}", target, target_kind),
                    )
                    .in_scope(&set.name),
                );
            }
        }
    }
    tracing::debug!(category = category.tag(), sets = sets.len(), "mapping rules done");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{mapping, run_family, sample_dictionary};

    #[test]
    fn test_sample_mappings_are_clean() {
        let dictionary = sample_dictionary();
        assert!(run_family(&dictionary, check_class_mappings).is_empty());
        assert!(run_family(&dictionary, check_unit_mappings).is_empty());
    }

    #[test]
    fn test_repeated_maps_from_reports_count() {
        let mut dictionary = sample_dictionary();
        let set = &mut dictionary.class_mapping_sets[0];
        set.mappings.push(mapping("Foo", Some("length")));
        set.mappings.push(mapping("Foo", Some("mass")));

        let diags = run_family(&dictionary, check_class_mappings);
        assert_eq!(diags.len(), 2);
        for d in &diags {
            assert_eq!(d.category, Category::ClassMap);
            assert_eq!(d.kind, DiagnosticKind::Uniqueness);
            assert_eq!(d.entity, "Foo");
            assert!(d.message.contains("occurs 2 times"), "{}", d.message);
        }
    }

    #[test]
    fn test_blank_target_is_not_checked() {
        let mut dictionary = sample_dictionary();
        dictionary.unit_mapping_sets[0].mappings.push(mapping("retired", Some("  ")));
        assert!(run_family(&dictionary, check_unit_mappings).is_empty());
    }

    #[test]
    fn test_dangling_targets() {
        let mut dictionary = sample_dictionary();
        dictionary.class_mapping_sets[0].mappings.push(mapping("len", Some("lenght")));
        dictionary.unit_mapping_sets[0].mappings.push(mapping("sec", Some("sec")));

        let class_diags = run_family(&dictionary, check_class_mappings);
        assert_eq!(class_diags.len(), 3);
        assert_eq!(class_diags[2].message, "mapsTo 'lenght' does not name an existing quantity class");

        let unit_diags = run_family(&dictionary, check_unit_mappings);
        assert_eq!(unit_diags.len(), 1);
        assert_eq!(unit_diags[0].category, Category::UnitMap);
        assert_eq!(unit_diags[0].scope.as_deref(), Some("v1"));
    }
}
