//! The dictionary snapshot and the lookups built over it.
pub use self::entities::{
    AffineConversion, ClassCode, Dictionary, IntegerCodeSet, Mapping, MappingSet, Prefix, QuantityClass, Reference,
    Unit, UnitCategory, UnitCode, UnitDimension,
};
pub use self::index::{Counts, DictionaryIndex};

mod entities;
mod index;

pub(crate) use self::index::float_key;
