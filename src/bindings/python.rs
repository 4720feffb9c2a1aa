use crate::config::{OutputDetail, ValidationConfig};
use crate::loader::{parse_dictionary, DictionarySources};
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

fn to_py_err(err: crate::Error) -> PyErr {
    match err {
        crate::Error::Load(load) => PyIOError::new_err(load.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

fn config(full_detail: bool, tolerance: Option<f64>) -> ValidationConfig {
    let detail = if full_detail { OutputDetail::Full } else { OutputDetail::Summary };
    let defaults = ValidationConfig::default();
    ValidationConfig { detail, tolerance: tolerance.unwrap_or(defaults.tolerance) }
}

/// Validates a dictionary JSON document and returns the report as JSON.
#[pyfunction]
#[pyo3(signature = (document, full_detail = false, tolerance = None))]
pub fn validate_json(document: &str, full_detail: bool, tolerance: Option<f64>) -> PyResult<String> {
    let dictionary = parse_dictionary(document).map_err(|e| PyValueError::new_err(format!("malformed dictionary: {}", e)))?;
    let report = crate::validate(&dictionary, &config(full_detail, tolerance)).map_err(to_py_err)?;
    report.to_json().map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Loads dictionary files from disk, validates them and returns the report
/// as JSON.
#[pyfunction]
#[pyo3(signature = (dictionary, integer_codes = None, class_mappings = None, unit_mappings = None, full_detail = false))]
pub fn validate_files(
    dictionary: String,
    integer_codes: Option<String>,
    class_mappings: Option<String>,
    unit_mappings: Option<String>,
    full_detail: bool,
) -> PyResult<String> {
    let sources = DictionarySources {
        dictionary: dictionary.into(),
        integer_codes: integer_codes.map(Into::into),
        class_mappings: class_mappings.map(Into::into),
        unit_mappings: unit_mappings.map(Into::into),
    };
    let report = crate::run(&sources, &config(full_detail, None)).map_err(to_py_err)?;
    report.to_json().map_err(|e| PyValueError::new_err(e.to_string()))
}
