//! Product Variant Model
//!
//! Storage-side variant rows and the instructions sent back to storage when
//! the variant table is submitted.

use super::combination::WeightUnit;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Persisted variant row (owned by the storage layer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedVariant {
    pub id: String,
    /// Product reference (String ID)
    pub product_id: String,
    #[serde(default)]
    pub sku: String,
    pub price: Decimal,
    #[serde(default)]
    pub stock: i64,
    /// Option group name → value text
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub package_weight: Option<Decimal>,
    #[serde(default)]
    pub weight_unit: Option<WeightUnit>,
}

/// Update instruction for an existing variant row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantUpdate {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl VariantUpdate {
    /// Nothing to write
    pub fn is_noop(&self) -> bool {
        self.price.is_none() && self.stock.is_none()
    }
}

/// Create instruction for a combination with no stored row yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantCreate {
    /// Option group name → value text (unused groups omitted)
    pub attributes: BTreeMap<String, String>,
    pub sku: String,
    pub price: Decimal,
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_weight: Option<Decimal>,
    pub weight_unit: WeightUnit,
}
