#![allow(dead_code)]

use std::path::{Path, PathBuf};
use uom_dictionary_core::model::{Dictionary, IntegerCodeSet, MappingSet, Unit};
use uom_dictionary_core::DictionarySources;

pub const DICTIONARY: &str = include_str!("../fixtures/uom.json");
pub const INTEGER_CODES: &str = include_str!("../fixtures/integer_codes.json");
pub const CLASS_MAP: &str = include_str!("../fixtures/class_map.json");
pub const UNIT_MAP: &str = include_str!("../fixtures/unit_map.json");

/// The fixture dictionary with all optional sets merged in, as a run
/// from files would produce it.
pub fn fixture() -> Dictionary {
    let mut dictionary: Dictionary = serde_json::from_str(DICTIONARY).expect("fixture dictionary");
    dictionary.integer_code_sets.push(serde_json::from_str::<IntegerCodeSet>(INTEGER_CODES).expect("integer codes"));
    dictionary.class_mapping_sets.push(serde_json::from_str::<MappingSet>(CLASS_MAP).expect("class map"));
    dictionary.unit_mapping_sets.push(serde_json::from_str::<MappingSet>(UNIT_MAP).expect("unit map"));
    dictionary
}

pub fn unit_mut<'d>(dictionary: &'d mut Dictionary, symbol: &str) -> &'d mut Unit {
    dictionary.units.iter_mut().find(|u| u.symbol == symbol).expect("no such unit")
}

/// Writes the four fixture files into `dir` and points sources at them.
pub fn write_sources(dir: &Path) -> DictionarySources {
    let write = |name: &str, content: &str| -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).expect("write fixture");
        path
    };
    DictionarySources::new(write("uom.json", DICTIONARY))
        .with_integer_codes(write("integer_codes.json", INTEGER_CODES))
        .with_class_mappings(write("class_map.json", CLASS_MAP))
        .with_unit_mappings(write("unit_map.json", UNIT_MAP))
}
