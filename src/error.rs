//! Fatal failures of a whole validation run.
use crate::loader::LoadError;
use crate::validation::DictionaryError;
use thiserror::Error;

/// Anything that stops a run before a report exists. Rule violations are
/// never errors; they are diagnostics inside the report.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error("cannot assemble the report: {0}")]
    Report(#[from] serde_json::Error),
}
