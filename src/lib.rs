//! Consistency checking for unit-of-measure dictionaries.
//!
//! A dictionary snapshot (dimensions, quantity classes, units, prefixes,
//! references, integer code sets and mapping sets) is indexed once, unit
//! symbols are parsed and reduced to canonical SI form, and an ordered
//! battery of rules reports every inconsistency it finds.
//!
//! ```no_run
//! use uom_dictionary_core::{run, DictionarySources, ValidationConfig};
//!
//! let sources = DictionarySources::new("uom.json").with_unit_mappings("unit_map.json");
//! let report = run(&sources, &ValidationConfig::default())?;
//! println!("{}", report);
//! # Ok::<(), uom_dictionary_core::Error>(())
//! ```
pub mod algebra;
pub mod analysis;
pub mod config;
pub mod display;
pub mod error;
pub mod loader;
pub mod model;
pub mod symbol;
pub mod validation;

#[cfg(feature = "python")]
mod bindings;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{OutputDetail, ValidationConfig};
pub use display::ValidationReport;
pub use error::Error;
pub use loader::{DictionarySources, LoadError, Preflight};
pub use model::Dictionary;
pub use validation::{Category, Diagnostic, DiagnosticKind, DictionaryError, Validator};

/// Validates an in-memory snapshot and groups the findings into a report.
pub fn validate(dictionary: &Dictionary, config: &ValidationConfig) -> Result<ValidationReport, Error> {
    tracing::info!(
        dimensions = dictionary.dimensions.len(),
        classes = dictionary.quantity_classes.len(),
        units = dictionary.units.len(),
        "validation started"
    );
    let diagnostics = Validator::new(dictionary).with_tolerance(config.tolerance).validate()?;
    tracing::info!(diagnostics = diagnostics.len(), "validation finished");
    Ok(ValidationReport::build(dictionary, diagnostics, config.detail)?)
}

/// Loads every source and validates the result. A load failure is
/// reported once and no rule runs.
///
/// The gatekeeper checks are the ones `load` performs, so a `LoadError`
/// here is exactly a preflight that is not continuable. Call
/// [`DictionarySources::preflight`] to ask the question without running.
pub fn run(sources: &DictionarySources, config: &ValidationConfig) -> Result<ValidationReport, Error> {
    let dictionary = sources.load().map_err(|err| {
        tracing::warn!(error = %err, "dictionary could not be loaded");
        err
    })?;
    validate(&dictionary, config)
}

/// Defines the `uom_dictionary._core` Python module.
#[cfg(feature = "python")]
#[pyo3::pymodule]
fn _core(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    use pyo3::prelude::*;
    m.add_function(wrap_pyfunction!(bindings::python::validate_json, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::python::validate_files, m)?)?;
    Ok(())
}
