//! Record types of a unit-of-measure dictionary snapshot.
//!
//! Every record mirrors one element of the dictionary document. The engine
//! only ever borrows these; nothing here is mutated during a run.
use serde::{Deserialize, Serialize};

/// The whole dictionary as one already-loaded snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dictionary {
    pub dimensions: Vec<UnitDimension>,
    pub quantity_classes: Vec<QuantityClass>,
    pub units: Vec<Unit>,
    pub references: Vec<Reference>,
    pub prefixes: Vec<Prefix>,
    pub integer_code_sets: Vec<IntegerCodeSet>,
    pub class_mapping_sets: Vec<MappingSet>,
    pub unit_mapping_sets: Vec<MappingSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitDimension {
    pub name: String,
    pub dimension: String,
    pub base_for_conversion: String,
    pub canonical_unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityClass {
    pub name: String,
    pub dimension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative_unit: Option<String>,
    pub base_for_conversion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_base: Option<String>,
    #[serde(default)]
    pub member_units: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// How a unit symbol is composed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// A bare token with no prefix and no operators, e.g. "m", "ft".
    #[default]
    Atom,
    /// A registered prefix glued to an atom, e.g. "km", "kPa".
    Prefixed,
    /// Anything built with separators, exponents or a multiplier.
    Derived,
}

impl UnitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Atom => "atom",
            UnitCategory::Prefixed => "prefixed",
            UnitCategory::Derived => "derived",
        }
    }
}

/// Parameters of `y = (A + Bx) / (C + Dx)`, converting a value in this unit
/// to its base unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AffineConversion {
    #[serde(default)]
    pub a: f64,
    pub b: f64,
    pub c: f64,
    #[serde(default)]
    pub d: f64,
}

impl AffineConversion {
    /// A purely multiplicative conversion (A = D = 0).
    pub fn scale(b: f64, c: f64) -> Self {
        Self { a: 0.0, b, c, d: 0.0 }
    }

    pub fn is_multiplicative(&self) -> bool {
        self.a == 0.0 && self.d == 0.0
    }

    /// The B/C factor of a multiplicative conversion, `None` otherwise or
    /// when C is zero.
    pub fn factor(&self) -> Option<f64> {
        if self.is_multiplicative() && self.c != 0.0 {
            Some(self.b / self.c)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub symbol: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_unit: Option<String>,
    #[serde(default)]
    pub category: UnitCategory,
    #[serde(default, rename = "isSI")]
    pub is_si: bool,
    #[serde(default)]
    pub is_exact: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion: Option<AffineConversion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_ref: Option<String>,
    pub dimension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlying_def: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Unit {
    /// The symbol this unit expands to during canonicalization: the
    /// SI-equivalent underlying definition when present, else the base unit.
    /// A unit naming itself has no definition.
    pub fn definition(&self) -> Option<&str> {
        self.underlying_def
            .as_deref()
            .or(self.base_unit.as_deref())
            .filter(|def| *def != self.symbol)
    }

    /// A terminal unit is its own base: canonicalization stops here.
    pub fn is_terminal(&self) -> bool {
        self.definition().is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prefix {
    pub symbol: String,
    pub name: String,
    pub multiplier: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerCodeSet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub class_codes: Vec<ClassCode>,
    #[serde(default)]
    pub unit_codes: Vec<UnitCode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassCode {
    pub term: String,
    pub code: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_code: Option<u32>,
    #[serde(default)]
    pub deprecated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitCode {
    pub term: String,
    pub code: u32,
    #[serde(default)]
    pub deprecated: bool,
}

/// A named set of renaming records, used for both class and unit mappings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mappings: Vec<Mapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    pub maps_from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps_to: Option<String>,
}

impl Mapping {
    /// The target, treating an empty or blank string as absent.
    pub fn target(&self) -> Option<&str> {
        self.maps_to.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}
