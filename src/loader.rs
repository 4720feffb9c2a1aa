//! Reading dictionary documents from disk.
//!
//! A run takes one dictionary file plus up to three optional files, each
//! holding a single set: integer codes, class mappings and unit mappings.
//! Every optional set is appended to the dictionary's own collections.
use crate::model::{Dictionary, IntegerCodeSet, MappingSet};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file '{}' does not exist", path.display())]
    Missing { path: PathBuf },
    #[error("cannot read '{}': {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("'{}' is not a well-formed {what}: {source}", path.display())]
    Malformed { path: PathBuf, what: &'static str, source: serde_json::Error },
}

/// Outcome of the gatekeeper checks run before the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preflight {
    pub dictionary_present: bool,
    pub well_formed: bool,
}

impl Preflight {
    /// Whether the engine may run at all.
    pub fn continuable(&self) -> bool {
        self.dictionary_present && self.well_formed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySources {
    pub dictionary: PathBuf,
    pub integer_codes: Option<PathBuf>,
    pub class_mappings: Option<PathBuf>,
    pub unit_mappings: Option<PathBuf>,
}

impl DictionarySources {
    pub fn new(dictionary: impl Into<PathBuf>) -> Self {
        Self { dictionary: dictionary.into(), integer_codes: None, class_mappings: None, unit_mappings: None }
    }

    pub fn with_integer_codes(mut self, path: impl Into<PathBuf>) -> Self {
        self.integer_codes = Some(path.into());
        self
    }

    pub fn with_class_mappings(mut self, path: impl Into<PathBuf>) -> Self {
        self.class_mappings = Some(path.into());
        self
    }

    pub fn with_unit_mappings(mut self, path: impl Into<PathBuf>) -> Self {
        self.unit_mappings = Some(path.into());
        self
    }

    /// Runs the gatekeeper checks without keeping the snapshot. Continuable
    /// exactly when [`load`](Self::load) succeeds.
    pub fn preflight(&self) -> Preflight {
        let dictionary_present = self.dictionary.is_file();
        let well_formed = dictionary_present && self.load().is_ok();
        Preflight { dictionary_present, well_formed }
    }

    /// Reads every source into one snapshot.
    pub fn load(&self) -> Result<Dictionary, LoadError> {
        let mut dictionary: Dictionary = read_json(&self.dictionary, "dictionary")?;

        if let Some(path) = &self.integer_codes {
            dictionary.integer_code_sets.push(read_json::<IntegerCodeSet>(path, "integer code set")?);
        }
        if let Some(path) = &self.class_mappings {
            dictionary.class_mapping_sets.push(read_json::<MappingSet>(path, "class mapping set")?);
        }
        if let Some(path) = &self.unit_mappings {
            dictionary.unit_mapping_sets.push(read_json::<MappingSet>(path, "unit mapping set")?);
        }

        tracing::debug!(
            path = %self.dictionary.display(),
            units = dictionary.units.len(),
            classes = dictionary.quantity_classes.len(),
            "dictionary loaded"
        );
        Ok(dictionary)
    }
}

/// Parses a dictionary document already held in memory.
pub fn parse_dictionary(document: &str) -> serde_json::Result<Dictionary> {
    serde_json::from_str(document)
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &'static str) -> Result<T, LoadError> {
    if !path.is_file() {
        return Err(LoadError::Missing { path: path.to_path_buf() });
    }
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Malformed { path: path.to_path_buf(), what, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DICTIONARY: &str = r#"{
        "units": [{ "symbol": "m", "name": "metre", "category": "atom", "isSI": true, "dimension": "L" }]
    }"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_appends_optional_sets() {
        let dir = tempfile::tempdir().unwrap();
        let sources = DictionarySources::new(write(&dir, "dict.json", DICTIONARY))
            .with_integer_codes(write(&dir, "codes.json", r#"{"name": "legacy", "unitCodes": [{"term": "m", "code": 1}]}"#))
            .with_unit_mappings(write(&dir, "umap.json", r#"{"name": "v1", "mappings": [{"mapsFrom": "meter", "mapsTo": "m"}]}"#));

        let dictionary = sources.load().unwrap();
        assert_eq!(dictionary.units.len(), 1);
        assert_eq!(dictionary.integer_code_sets[0].unit_codes[0].code, 1);
        assert_eq!(dictionary.unit_mapping_sets[0].mappings[0].target(), Some("m"));
        assert!(dictionary.class_mapping_sets.is_empty());
        assert!(sources.preflight().continuable());
    }

    #[test]
    fn test_missing_dictionary_is_not_continuable() {
        let dir = tempfile::tempdir().unwrap();
        let sources = DictionarySources::new(dir.path().join("absent.json"));
        assert!(matches!(sources.load(), Err(LoadError::Missing { .. })));
        let preflight = sources.preflight();
        assert!(!preflight.dictionary_present);
        assert!(!preflight.continuable());
    }

    #[test]
    fn test_malformed_source_names_its_role() {
        let dir = tempfile::tempdir().unwrap();
        let sources = DictionarySources::new(write(&dir, "dict.json", DICTIONARY))
            .with_class_mappings(write(&dir, "cmap.json", "{ not json"));

        let err = sources.load().unwrap_err();
        assert!(err.to_string().contains("not a well-formed class mapping set"), "{}", err);
        let preflight = sources.preflight();
        assert!(preflight.dictionary_present);
        assert!(!preflight.continuable());
    }
}
