//! The validation report: diagnostics grouped by collection, optionally
//! alongside the records they were raised against.
use crate::config::OutputDetail;
use crate::model::Dictionary;
use crate::validation::{Category, Diagnostic};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    pub category: Category,
    /// The collection's field name in the dictionary document.
    pub collection: &'static str,
    /// Echoed input records; only present in full-detail reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Value>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub detail: OutputDetail,
    pub diagnostic_count: usize,
    pub sections: Vec<ReportSection>,
}

fn collection_name(category: Category) -> &'static str {
    match category {
        Category::Dimension => "dimensions",
        Category::Class => "quantityClasses",
        Category::Unit => "units",
        Category::Reference => "references",
        Category::Prefix => "prefixes",
        Category::Integer => "integerCodeSets",
        Category::ClassMap => "classMappingSets",
        Category::UnitMap => "unitMappingSets",
    }
}

fn records(dictionary: &Dictionary, category: Category) -> serde_json::Result<Value> {
    match category {
        Category::Dimension => serde_json::to_value(&dictionary.dimensions),
        Category::Class => serde_json::to_value(&dictionary.quantity_classes),
        Category::Unit => serde_json::to_value(&dictionary.units),
        Category::Reference => serde_json::to_value(&dictionary.references),
        Category::Prefix => serde_json::to_value(&dictionary.prefixes),
        Category::Integer => serde_json::to_value(&dictionary.integer_code_sets),
        Category::ClassMap => serde_json::to_value(&dictionary.class_mapping_sets),
        Category::UnitMap => serde_json::to_value(&dictionary.unit_mapping_sets),
    }
}

impl ValidationReport {
    /// Groups `diagnostics` into one section per collection, in execution
    /// order. Every section is present even when it has nothing to report.
    pub fn build(
        dictionary: &Dictionary,
        diagnostics: Vec<Diagnostic>,
        detail: OutputDetail,
    ) -> serde_json::Result<Self> {
        let diagnostic_count = diagnostics.len();
        let mut sections = Category::ALL
            .iter()
            .map(|&category| -> serde_json::Result<ReportSection> {
                let records = match detail {
                    OutputDetail::Full => Some(records(dictionary, category)?),
                    OutputDetail::Summary => None,
                };
                Ok(ReportSection { category, collection: collection_name(category), records, diagnostics: Vec::new() })
            })
            .collect::<serde_json::Result<Vec<_>>>()?;

        for diagnostic in diagnostics {
            // Category::ALL and the section list share one order.
            let slot = diagnostic.category as usize;
            sections[slot].diagnostics.push(diagnostic);
        }

        Ok(Self { detail, diagnostic_count, sections })
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostic_count == 0
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.sections.iter().flat_map(|s| s.diagnostics.iter())
    }

    pub fn section(&self, category: Category) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.category == category)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A plain-text audit listing, one block per collection with findings.
impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "UOM DICTIONARY REPORT: {} diagnostic(s)", self.diagnostic_count)?;
        writeln!(f, "--------------------------------------------------")?;
        for section in self.sections.iter().filter(|s| !s.diagnostics.is_empty()) {
            writeln!(f, "{} ({})", section.category, section.collection)?;
            for (i, d) in section.diagnostics.iter().enumerate() {
                let branch = if i + 1 == section.diagnostics.len() { "└──" } else { "├──" };
                match &d.scope {
                    Some(scope) => writeln!(f, "{} {} [{}]: {}", branch, d.entity, scope, d.message)?,
                    None => writeln!(f, "{} {}: {}", branch, d.entity, d.message)?,
                }
            }
        }
        Ok(())
    }
}
