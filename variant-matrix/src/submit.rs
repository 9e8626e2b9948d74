//! Submit payloads
//!
//! Turns the variant table into storage instructions. Rows with a stored
//! counterpart become updates (lenient: malformed numbers are skipped), the
//! rest become creates (strict: malformed numbers are rejected).

use crate::persisted::PersistedIdMap;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Combination, UNUSED_OPTION, VariantCreate, VariantUpdate};
use shared::util::{parse_decimal, parse_quantity};
use std::collections::{BTreeMap, HashMap};

/// Everything the calling form sends to storage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitPlan {
    pub updates: Vec<VariantUpdate>,
    pub creates: Vec<VariantCreate>,
    /// Stored variant ids with no combination left in the table
    pub removed: Vec<String>,
}

/// Update instructions for rows that map to a stored variant.
///
/// Price and stock are included only when they parse.
pub fn build_update_instructions(
    combinations: &[Combination],
    id_map: &PersistedIdMap,
) -> Vec<VariantUpdate> {
    combinations
        .iter()
        .filter_map(|c| {
            let variant_id = id_map.get(&c.id)?;
            Some(VariantUpdate {
                id: variant_id.clone(),
                price: parse_decimal(&c.fields.price),
                stock: parse_quantity(&c.fields.quantity),
            })
        })
        .collect()
}

/// Create instructions for rows without a stored variant
pub fn build_create_instructions(
    combinations: &[Combination],
    id_map: &PersistedIdMap,
) -> AppResult<Vec<VariantCreate>> {
    check_unique_skus(combinations)?;

    combinations
        .iter()
        .filter(|c| !id_map.contains_key(&c.id))
        .map(create_instruction)
        .collect()
}

fn create_instruction(c: &Combination) -> AppResult<VariantCreate> {
    let fields = &c.fields;

    let price = parse_decimal(&fields.price).ok_or_else(|| {
        AppError::combination(ErrorCode::VariantInvalidPrice, &c.id)
            .with_detail("value", fields.price.as_str())
    })?;

    let stock = if fields.quantity.trim().is_empty() {
        0
    } else {
        parse_quantity(&fields.quantity).ok_or_else(|| {
            AppError::combination(ErrorCode::VariantInvalidQuantity, &c.id)
                .with_detail("value", fields.quantity.as_str())
        })?
    };

    let package_weight = if fields.weight.trim().is_empty() {
        None
    } else {
        Some(parse_decimal(&fields.weight).ok_or_else(|| {
            AppError::combination(ErrorCode::VariantInvalidWeight, &c.id)
                .with_detail("value", fields.weight.as_str())
        })?)
    };

    let attributes: BTreeMap<String, String> = c
        .options
        .iter()
        .filter(|e| e.value != UNUSED_OPTION)
        .map(|e| (e.group.clone(), e.value.clone()))
        .collect();

    Ok(VariantCreate {
        attributes,
        sku: fields.sku.trim().to_string(),
        price,
        stock,
        package_weight,
        weight_unit: fields.weight_unit,
    })
}

fn check_unique_skus(combinations: &[Combination]) -> AppResult<()> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for c in combinations {
        let sku = c.fields.sku.trim();
        if sku.is_empty() {
            continue;
        }
        if let Some(first) = seen.insert(sku, c.id.as_str()) {
            return Err(AppError::combination(ErrorCode::VariantDuplicateSku, &c.id)
                .with_detail("sku", sku)
                .with_detail("conflicts_with", first));
        }
    }
    Ok(())
}

/// Stored variants whose combination is gone from the table, sorted
pub fn removed_variant_ids(combinations: &[Combination], id_map: &PersistedIdMap) -> Vec<String> {
    let mut removed: Vec<String> = id_map
        .iter()
        .filter(|(key, _)| !combinations.iter().any(|c| &c.id == *key))
        .map(|(_, variant_id)| variant_id.clone())
        .collect();
    removed.sort();
    removed
}

pub fn plan_submit(
    combinations: &[Combination],
    id_map: &PersistedIdMap,
) -> AppResult<SubmitPlan> {
    let plan = SubmitPlan {
        updates: build_update_instructions(combinations, id_map),
        creates: build_create_instructions(combinations, id_map)?,
        removed: removed_variant_ids(combinations, id_map),
    };
    tracing::debug!(
        updates = plan.updates.len(),
        creates = plan.creates.len(),
        removed = plan.removed.len(),
        "Planned variant submit"
    );
    Ok(plan)
}
