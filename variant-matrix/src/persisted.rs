//! Edit flow: bridge stored variant rows and the editing session
//!
//! Stored rows only know attribute text (`{"Color": "Red"}`); the editor
//! works with option value ids. When a product is opened for editing, option
//! groups are derived from the rows, every row gets its combination id, and
//! the resulting `combination id → variant id` map lets submit target the
//! existing rows.

use crate::config::EngineConfig;
use crate::generate::generate_combinations;
use crate::key::{CombinationKeyMode, combination_key};
use shared::models::{
    Combination, CombinationFields, OptionGroup, OptionValue, PersistedVariant, UNUSED_OPTION,
};
use shared::util::random_token;
use std::collections::HashMap;

/// Combination id → persisted variant id
pub type PersistedIdMap = HashMap<String, String>;

/// Rebuild option groups from stored attribute maps.
///
/// Group and value order follow first appearance across the rows.
pub fn derive_option_groups(
    variants: &[PersistedVariant],
    config: &EngineConfig,
) -> Vec<OptionGroup> {
    let mut groups: Vec<OptionGroup> = Vec::new();

    for variant in variants {
        for (name, text) in &variant.attributes {
            let text = text.trim();
            if name.trim().is_empty() || text.is_empty() || text == UNUSED_OPTION {
                continue;
            }

            let index = match groups.iter().position(|g| g.name == *name) {
                Some(index) => index,
                None if groups.len() < config.max_option_groups => {
                    groups.push(OptionGroup {
                        id: random_token(config.id_length),
                        name: name.clone(),
                        values: Vec::new(),
                    });
                    groups.len() - 1
                }
                None => {
                    tracing::warn!(
                        variant = %variant.id,
                        group = %name,
                        max = config.max_option_groups,
                        "Attribute exceeds option group cap, ignored"
                    );
                    continue;
                }
            };

            let group = &mut groups[index];
            if group.value_by_text(text).is_none() {
                group
                    .values
                    .push(OptionValue::new(random_token(config.id_length), text));
            }
        }
    }

    for group in &mut groups {
        group
            .values
            .push(OptionValue::placeholder(random_token(config.id_length)));
    }
    groups
}

/// Compute each stored row's combination id.
///
/// Rows naming a value the groups do not contain, or carrying no option at
/// all, are skipped. When two rows resolve to the same id the first wins.
pub fn build_persisted_id_map(
    variants: &[PersistedVariant],
    groups: &[OptionGroup],
    mode: CombinationKeyMode,
) -> PersistedIdMap {
    let mut map = PersistedIdMap::new();

    for variant in variants {
        let Some(value_ids) = resolve_value_ids(variant, groups) else {
            tracing::warn!(
                variant = %variant.id,
                "Stored variant references an unknown option value, skipped"
            );
            continue;
        };
        if value_ids.is_empty() {
            continue;
        }

        let key = combination_key(&value_ids, mode);
        if let Some(existing) = map.get(&key) {
            tracing::warn!(
                variant = %variant.id,
                existing = %existing,
                combination = %key,
                "Duplicate stored variant for combination, keeping first"
            );
            continue;
        }
        map.insert(key, variant.id.clone());
    }
    map
}

/// Value ids of `variant` in group order; `None` if a value is unknown
fn resolve_value_ids(variant: &PersistedVariant, groups: &[OptionGroup]) -> Option<Vec<String>> {
    let mut ids = Vec::new();
    for group in groups.iter().filter(|g| g.is_active()) {
        let Some(text) = variant.attributes.get(&group.name) else {
            continue;
        };
        let value = group.value_by_text(text.trim())?;
        ids.push(value.id.clone());
    }
    Some(ids)
}

/// Initial variant table for an edit session, pre-filled from stored rows
pub fn seed_combinations(
    variants: &[PersistedVariant],
    groups: &[OptionGroup],
    id_map: &PersistedIdMap,
    mode: CombinationKeyMode,
) -> Vec<Combination> {
    let by_id: HashMap<&str, &PersistedVariant> =
        variants.iter().map(|v| (v.id.as_str(), v)).collect();

    generate_combinations(groups, &[], mode)
        .into_iter()
        .map(|mut combination| {
            if let Some(variant) = id_map
                .get(&combination.id)
                .and_then(|variant_id| by_id.get(variant_id.as_str()))
            {
                combination.fields = stored_fields(variant);
            }
            combination
        })
        .collect()
}

fn stored_fields(variant: &PersistedVariant) -> CombinationFields {
    CombinationFields {
        price: variant.price.to_string(),
        quantity: variant.stock.to_string(),
        sku: variant.sku.clone(),
        weight: variant
            .package_weight
            .map(|w| w.to_string())
            .unwrap_or_default(),
        weight_unit: variant.weight_unit.unwrap_or_default(),
    }
}
