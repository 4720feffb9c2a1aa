//! The central validator that runs the rule battery over a dictionary.
use super::error::{Diagnostic, DictionaryError};
use super::rules::{RuleContext, BATTERY};
use crate::algebra::DEFAULT_TOLERANCE;
use crate::analysis::topology;
use crate::model::{Dictionary, DictionaryIndex};

/// The orchestrator for the consistency engine.
///
/// Like a linter, it collects every violation instead of stopping at the
/// first. The only early exit is a cyclic definition chain, which would
/// make canonical forms meaningless.
pub struct Validator<'a> {
    dictionary: &'a Dictionary,
    tolerance: f64,
}

impl<'a> Validator<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary, tolerance: DEFAULT_TOLERANCE }
    }

    /// Relative tolerance used by every conversion-factor comparison.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Runs every rule family in order.
    ///
    /// # Returns
    /// - `Ok(diagnostics)`, empty for a consistent dictionary.
    /// - `Err(DictionaryError::CyclicDefinition)` when unit definitions
    ///   refer to each other; no rule runs in that case.
    pub fn validate(&self) -> Result<Vec<Diagnostic>, DictionaryError> {
        let index = DictionaryIndex::new(self.dictionary);

        let cycles = topology::definition_cycles(&index);
        if !cycles.is_empty() {
            let cycles: Vec<Vec<String>> =
                cycles.into_iter().map(|c| c.into_iter().map(str::to_string).collect()).collect();
            tracing::warn!(?cycles, "cyclic unit definitions, skipping consistency rules");
            return Err(DictionaryError::CyclicDefinition { cycles });
        }

        let ctx = RuleContext::new(&index, self.tolerance);
        let mut diagnostics = Vec::new();
        for (category, family) in BATTERY {
            let before = diagnostics.len();
            family(&ctx, &mut diagnostics);
            tracing::debug!(category = category.tag(), found = diagnostics.len() - before, "rule family finished");
        }
        Ok(diagnostics)
    }
}
