//! Combination Model
//!
//! One row of the variant table: a cell of the cartesian product of all
//! active option groups plus the fields the merchant enters for it.

use serde::{Deserialize, Serialize};

/// Display value for a named group that has no filled values yet
pub const UNUSED_OPTION: &str = "-";

/// Package weight unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Gram => "g",
            WeightUnit::Kilogram => "kg",
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-combination editable fields
///
/// Kept as raw strings: the table holds whatever the merchant typed and
/// numeric interpretation happens at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationFields {
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub weight_unit: WeightUnit,
}

impl CombinationFields {
    pub fn is_empty(&self) -> bool {
        self.price.is_empty()
            && self.quantity.is_empty()
            && self.sku.is_empty()
            && self.weight.is_empty()
    }
}

/// Group name → chosen value text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub group: String,
    pub value: String,
}

/// One row of the variant table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    /// Composite key built from `value_ids`
    pub id: String,
    /// Constituent option value ids, in group order
    pub value_ids: Vec<String>,
    /// One entry per named group, in group order
    pub options: Vec<OptionEntry>,
    #[serde(flatten)]
    pub fields: CombinationFields,
}

impl Combination {
    /// Value chosen for `group`, `"-"` when the group is unused
    pub fn option(&self, group: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|e| e.group == group)
            .map(|e| e.value.as_str())
    }

    /// Human-readable title, e.g. `Red / S`
    pub fn title(&self) -> String {
        self.options
            .iter()
            .filter(|e| e.value != UNUSED_OPTION)
            .map(|e| e.value.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}
