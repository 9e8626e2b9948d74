//! Option group editing
//!
//! Each operation takes the current groups and returns the edited list.
//! Invalid targets (unknown ids, cap reached, non-permutations) leave the
//! list unchanged. Every group keeps at least one row and always ends with
//! an empty placeholder.

use crate::config::EngineConfig;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{OptionGroup, OptionValue};
use shared::util::random_token;
use std::collections::HashSet;

/// Append an unnamed group; no-op at the group cap
pub fn add_option_group(mut groups: Vec<OptionGroup>, config: &EngineConfig) -> Vec<OptionGroup> {
    if groups.len() >= config.max_option_groups {
        tracing::debug!(
            max = config.max_option_groups,
            "Option group cap reached, ignoring add"
        );
        return groups;
    }
    groups.push(OptionGroup::new(
        random_token(config.id_length),
        random_token(config.id_length),
    ));
    groups
}

pub fn remove_option_group(mut groups: Vec<OptionGroup>, group_id: &str) -> Vec<OptionGroup> {
    groups.retain(|g| g.id != group_id);
    groups
}

pub fn rename_option_group(
    mut groups: Vec<OptionGroup>,
    group_id: &str,
    name: &str,
) -> Vec<OptionGroup> {
    if let Some(group) = groups.iter_mut().find(|g| g.id == group_id) {
        group.name = name.to_string();
    }
    groups
}

/// Set the text of one value.
///
/// Typing into the trailing placeholder promotes it and appends a fresh one.
pub fn set_option_value(
    mut groups: Vec<OptionGroup>,
    group_id: &str,
    value_id: &str,
    text: &str,
    config: &EngineConfig,
) -> Vec<OptionGroup> {
    let Some(group) = groups.iter_mut().find(|g| g.id == group_id) else {
        return groups;
    };
    let Some(index) = group.values.iter().position(|v| v.id == value_id) else {
        return groups;
    };

    let was_placeholder = index + 1 == group.values.len() && group.values[index].is_empty();
    group.values[index].value = text.to_string();

    if was_placeholder && !group.values[index].is_empty() {
        group
            .values
            .push(OptionValue::placeholder(random_token(config.id_length)));
    }
    groups
}

pub fn set_option_image(
    mut groups: Vec<OptionGroup>,
    group_id: &str,
    value_id: &str,
    image: Option<String>,
) -> Vec<OptionGroup> {
    if let Some(value) = groups
        .iter_mut()
        .find(|g| g.id == group_id)
        .and_then(|g| g.values.iter_mut().find(|v| v.id == value_id))
    {
        value.image = image;
    }
    groups
}

/// Remove one value row, restoring the trailing placeholder if needed
pub fn remove_option_value(
    mut groups: Vec<OptionGroup>,
    group_id: &str,
    value_id: &str,
    config: &EngineConfig,
) -> Vec<OptionGroup> {
    let Some(group) = groups.iter_mut().find(|g| g.id == group_id) else {
        return groups;
    };
    let before = group.values.len();
    group.values.retain(|v| v.id != value_id);
    if group.values.len() == before {
        return groups;
    }

    if group.trailing_placeholder().is_none() {
        group
            .values
            .push(OptionValue::placeholder(random_token(config.id_length)));
    }
    groups
}

/// Apply a drag-and-drop reorder.
///
/// `new_order` must list every value id of the group except the trailing
/// placeholder exactly once (the placeholder may be included, it always
/// ends up last).
pub fn reorder_option_values(
    mut groups: Vec<OptionGroup>,
    group_id: &str,
    new_order: &[String],
) -> Vec<OptionGroup> {
    let Some(group) = groups.iter_mut().find(|g| g.id == group_id) else {
        return groups;
    };

    let placeholder_id = group.trailing_placeholder().map(|p| p.id.clone());
    let movable = group.values.len() - usize::from(placeholder_id.is_some());
    let order: Vec<&String> = new_order
        .iter()
        .filter(|id| Some(*id) != placeholder_id.as_ref())
        .collect();

    let unique: HashSet<&String> = order.iter().copied().collect();
    let is_permutation = order.len() == movable
        && unique.len() == movable
        && order.iter().all(|id| group.value(id).is_some());
    if !is_permutation {
        tracing::debug!(group = %group_id, "Ignoring reorder that is not a permutation");
        return groups;
    }

    let mut reordered: Vec<OptionValue> = Vec::with_capacity(group.values.len());
    for id in order {
        if let Some(value) = group.value(id) {
            reordered.push(value.clone());
        }
    }
    if let Some(placeholder) = group.trailing_placeholder() {
        reordered.push(placeholder.clone());
    }
    group.values = reordered;
    groups
}

/// Strict checks run before submit
pub fn validate_groups(groups: &[OptionGroup], config: &EngineConfig) -> AppResult<()> {
    if groups.len() > config.max_option_groups {
        return Err(AppError::new(ErrorCode::OptionGroupLimitReached)
            .with_detail("max", config.max_option_groups)
            .with_detail("count", groups.len()));
    }

    let mut seen = HashSet::new();
    for group in groups.iter().filter(|g| g.is_named()) {
        let name = group.name.trim().to_lowercase();
        if !seen.insert(name) {
            return Err(AppError::new(ErrorCode::OptionGroupNameDuplicate)
                .with_detail("name", group.name.trim()));
        }

        let mut values = HashSet::new();
        for value in group.filled_values() {
            if !values.insert(value.value.trim().to_lowercase()) {
                return Err(AppError::new(ErrorCode::OptionValueDuplicate)
                    .with_detail("group", group.name.trim())
                    .with_detail("value", value.value.trim()));
            }
        }
    }
    Ok(())
}
