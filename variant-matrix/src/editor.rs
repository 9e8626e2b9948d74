//! Variant editor session
//!
//! Owns the option groups, the variant table and (for existing products) the
//! map to stored variant rows. Every option edit regenerates the table and
//! carries entered data forward.

use crate::config::EngineConfig;
use crate::generate::generate_combinations;
use crate::options;
use crate::persisted::{self, PersistedIdMap};
use crate::submit::{self, SubmitPlan};
use shared::error::AppResult;
use shared::models::{
    Combination, CombinationFields, OptionGroup, PersistedVariant, VariantUpdate, WeightUnit,
};

/// Bulk edit applied to every row ("apply to all")
///
/// `None` leaves the field untouched. SKUs are per-row and not part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldsPatch {
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub weight: Option<String>,
    pub weight_unit: Option<WeightUnit>,
}

#[derive(Debug, Clone)]
pub struct VariantEditor {
    config: EngineConfig,
    groups: Vec<OptionGroup>,
    combinations: Vec<Combination>,
    persisted_ids: PersistedIdMap,
}

impl VariantEditor {
    /// Empty session for a new product
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: config.sanitized(),
            groups: Vec::new(),
            combinations: Vec::new(),
            persisted_ids: PersistedIdMap::new(),
        }
    }

    /// Session for an existing product
    pub fn from_persisted(variants: &[PersistedVariant], config: EngineConfig) -> Self {
        let config = config.sanitized();
        let groups = persisted::derive_option_groups(variants, &config);
        let persisted_ids = persisted::build_persisted_id_map(variants, &groups, config.key_mode);
        let combinations =
            persisted::seed_combinations(variants, &groups, &persisted_ids, config.key_mode);

        tracing::debug!(
            variants = variants.len(),
            groups = groups.len(),
            mapped = persisted_ids.len(),
            "Loaded variant editor from stored variants"
        );

        Self {
            config,
            groups,
            combinations,
            persisted_ids,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    pub fn group(&self, group_id: &str) -> Option<&OptionGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    pub fn combination(&self, combination_id: &str) -> Option<&Combination> {
        self.combinations.iter().find(|c| c.id == combination_id)
    }

    /// Find a row by the value text chosen in each group, e.g. `[("Color", "Red")]`
    pub fn find_combination(&self, selection: &[(&str, &str)]) -> Option<&Combination> {
        self.combinations.iter().find(|c| {
            selection
                .iter()
                .all(|(group, value)| c.option(group) == Some(*value))
        })
    }

    pub fn persisted_ids(&self) -> &PersistedIdMap {
        &self.persisted_ids
    }

    // ========== Option edits ==========

    /// Returns the new group's id, `None` at the cap
    pub fn add_option_group(&mut self) -> Option<String> {
        let before = self.groups.len();
        self.groups = options::add_option_group(std::mem::take(&mut self.groups), &self.config);
        if self.groups.len() == before {
            return None;
        }
        self.regenerate();
        self.groups.last().map(|g| g.id.clone())
    }

    pub fn remove_option_group(&mut self, group_id: &str) {
        self.groups = options::remove_option_group(std::mem::take(&mut self.groups), group_id);
        self.regenerate();
    }

    pub fn rename_option_group(&mut self, group_id: &str, name: &str) {
        self.groups =
            options::rename_option_group(std::mem::take(&mut self.groups), group_id, name);
        self.regenerate();
    }

    pub fn set_option_value(&mut self, group_id: &str, value_id: &str, text: &str) {
        self.groups = options::set_option_value(
            std::mem::take(&mut self.groups),
            group_id,
            value_id,
            text,
            &self.config,
        );
        self.regenerate();
    }

    /// Type `text` into the group's trailing placeholder; returns the value id
    pub fn push_option_value(&mut self, group_id: &str, text: &str) -> Option<String> {
        let value_id = self.group(group_id)?.trailing_placeholder()?.id.clone();
        self.set_option_value(group_id, &value_id, text);
        Some(value_id)
    }

    pub fn remove_option_value(&mut self, group_id: &str, value_id: &str) {
        self.groups = options::remove_option_value(
            std::mem::take(&mut self.groups),
            group_id,
            value_id,
            &self.config,
        );
        self.regenerate();
    }

    pub fn reorder_option_values(&mut self, group_id: &str, new_order: &[String]) {
        self.groups =
            options::reorder_option_values(std::mem::take(&mut self.groups), group_id, new_order);
        self.regenerate();
    }

    /// Images do not affect combinations, so no regeneration
    pub fn set_option_image(&mut self, group_id: &str, value_id: &str, image: Option<String>) {
        self.groups = options::set_option_image(
            std::mem::take(&mut self.groups),
            group_id,
            value_id,
            image,
        );
    }

    fn regenerate(&mut self) {
        let previous = std::mem::take(&mut self.combinations);
        self.combinations = generate_combinations(&self.groups, &previous, self.config.key_mode);
    }

    // ========== Row edits ==========

    /// Returns `false` if no row has this id
    pub fn set_fields(&mut self, combination_id: &str, fields: CombinationFields) -> bool {
        self.update_row(combination_id, |f| *f = fields)
    }

    pub fn set_price(&mut self, combination_id: &str, price: &str) -> bool {
        self.update_row(combination_id, |f| f.price = price.to_string())
    }

    pub fn set_quantity(&mut self, combination_id: &str, quantity: &str) -> bool {
        self.update_row(combination_id, |f| f.quantity = quantity.to_string())
    }

    pub fn set_sku(&mut self, combination_id: &str, sku: &str) -> bool {
        self.update_row(combination_id, |f| f.sku = sku.to_string())
    }

    pub fn set_weight(&mut self, combination_id: &str, weight: &str, unit: WeightUnit) -> bool {
        self.update_row(combination_id, |f| {
            f.weight = weight.to_string();
            f.weight_unit = unit;
        })
    }

    fn update_row(
        &mut self,
        combination_id: &str,
        edit: impl FnOnce(&mut CombinationFields),
    ) -> bool {
        match self.combinations.iter_mut().find(|c| c.id == combination_id) {
            Some(row) => {
                edit(&mut row.fields);
                true
            }
            None => false,
        }
    }

    /// Fill empty cells of every row; entered values are kept
    pub fn apply_to_all(&mut self, patch: &FieldsPatch) {
        for row in &mut self.combinations {
            let fields = &mut row.fields;
            let weight_was_empty = fields.weight.trim().is_empty();
            fill_empty(&mut fields.price, patch.price.as_deref());
            fill_empty(&mut fields.quantity, patch.quantity.as_deref());
            fill_empty(&mut fields.weight, patch.weight.as_deref());
            if weight_was_empty && let Some(unit) = patch.weight_unit {
                fields.weight_unit = unit;
            }
        }
    }

    /// Discard all editing state (keeps configuration)
    pub fn reset(&mut self) {
        self.groups.clear();
        self.combinations.clear();
        self.persisted_ids.clear();
    }

    // ========== Submit ==========

    /// Lenient update payload for stored rows
    pub fn update_instructions(&self) -> Vec<VariantUpdate> {
        submit::build_update_instructions(&self.combinations, &self.persisted_ids)
    }

    /// Validate groups and build the full submit plan
    pub fn plan_submit(&self) -> AppResult<SubmitPlan> {
        options::validate_groups(&self.groups, &self.config)?;
        submit::plan_submit(&self.combinations, &self.persisted_ids)
    }
}

fn fill_empty(cell: &mut String, value: Option<&str>) {
    if let Some(value) = value
        && cell.trim().is_empty()
    {
        *cell = value.to_string();
    }
}

impl Default for VariantEditor {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
