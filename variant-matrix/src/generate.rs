//! Combination generation
//!
//! Builds the cartesian product of all active option groups, in group order
//! and, within a group, in value entry order.

use crate::key::{CombinationKeyMode, combination_key};
use crate::reconcile::reconcile;
use shared::models::{
    Combination, CombinationFields, OptionEntry, OptionGroup, OptionValue, UNUSED_OPTION,
};

/// Regenerate the variant table and carry forward entered data.
///
/// Groups that are unnamed or have no filled value do not take part in the
/// product. Named groups without values still show up in every
/// combination's option list as `"-"`. When no group is active the table is
/// cleared.
pub fn generate_combinations(
    groups: &[OptionGroup],
    previous: &[Combination],
    mode: CombinationKeyMode,
) -> Vec<Combination> {
    reconcile(build_matrix(groups, mode), previous).combinations
}

/// Cartesian product with empty fields
pub fn build_matrix(groups: &[OptionGroup], mode: CombinationKeyMode) -> Vec<Combination> {
    let axes: Vec<Vec<&OptionValue>> = groups
        .iter()
        .filter(|g| g.is_active())
        .map(|g| g.filled_values().collect())
        .collect();
    if axes.is_empty() {
        return Vec::new();
    }

    cartesian_product(&axes)
        .into_iter()
        .map(|tuple| {
            let value_ids: Vec<String> = tuple.iter().map(|v| v.id.clone()).collect();
            Combination {
                id: combination_key(&value_ids, mode),
                options: option_entries(groups, &tuple),
                value_ids,
                fields: CombinationFields::default(),
            }
        })
        .collect()
}

/// One entry per named group; `tuple` holds one value per active group
fn option_entries(groups: &[OptionGroup], tuple: &[&OptionValue]) -> Vec<OptionEntry> {
    let mut chosen = tuple.iter();
    groups
        .iter()
        .filter(|g| g.is_named())
        .map(|g| {
            let value = if g.is_active() {
                chosen.next().map(|v| v.value.clone())
            } else {
                None
            };
            OptionEntry {
                group: g.name.clone(),
                value: value.unwrap_or_else(|| UNUSED_OPTION.to_string()),
            }
        })
        .collect()
}

pub(crate) fn cartesian_product<'a, T>(axes: &[Vec<&'a T>]) -> Vec<Vec<&'a T>> {
    axes.iter().fold(vec![Vec::new()], |acc, axis| {
        acc.iter()
            .flat_map(|prefix| {
                axis.iter().map(move |item| {
                    let mut tuple = prefix.clone();
                    tuple.push(*item);
                    tuple
                })
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, name: &str, values: &[(&str, &str)]) -> OptionGroup {
        let mut values: Vec<OptionValue> = values
            .iter()
            .map(|(id, text)| OptionValue::new(*id, *text))
            .collect();
        values.push(OptionValue::placeholder(format!("{id}-p")));
        OptionGroup {
            id: id.into(),
            name: name.into(),
            values,
        }
    }

    fn color_size() -> Vec<OptionGroup> {
        vec![
            group("g1", "Color", &[("red", "Red"), ("blue", "Blue")]),
            group("g2", "Size", &[("s", "S"), ("m", "M")]),
        ]
    }

    fn titles(combinations: &[Combination]) -> Vec<String> {
        combinations.iter().map(|c| c.title()).collect()
    }

    #[test]
    fn test_color_by_size() {
        let combinations = build_matrix(&color_size(), CombinationKeyMode::Positional);
        assert_eq!(
            titles(&combinations),
            vec!["Red / S", "Red / M", "Blue / S", "Blue / M"]
        );
        let keys: Vec<&str> = combinations.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(keys, vec!["red-s", "red-m", "blue-s", "blue-m"]);
        assert_eq!(combinations[0].value_ids, vec!["red", "s"]);
    }

    #[test]
    fn test_count_is_product_and_keys_unique() {
        let groups = vec![
            group("g1", "Color", &[("a", "A"), ("b", "B"), ("c", "C")]),
            group("g2", "Size", &[("d", "D"), ("e", "E")]),
            group("g3", "Fit", &[("f", "F"), ("g", "G"), ("h", "H"), ("i", "I")]),
        ];
        for mode in [CombinationKeyMode::Positional, CombinationKeyMode::Sorted] {
            let combinations = build_matrix(&groups, mode);
            assert_eq!(combinations.len(), 3 * 2 * 4);
            let unique: std::collections::HashSet<&str> =
                combinations.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(unique.len(), combinations.len());
        }
    }

    #[test]
    fn test_no_active_group_clears_table() {
        let groups = vec![group("g1", "Color", &[]), group("g2", "", &[("s", "S")])];
        assert!(build_matrix(&groups, CombinationKeyMode::Sorted).is_empty());
        assert!(build_matrix(&[], CombinationKeyMode::Sorted).is_empty());
    }

    #[test]
    fn test_named_group_without_values_maps_to_dash() {
        let groups = vec![
            group("g1", "Color", &[("red", "Red")]),
            group("g2", "Material", &[]),
            group("g3", "Size", &[("s", "S")]),
        ];
        let combinations = build_matrix(&groups, CombinationKeyMode::Positional);
        assert_eq!(combinations.len(), 1);
        let c = &combinations[0];
        assert_eq!(c.id, "red-s");
        assert_eq!(c.options.len(), 3);
        assert_eq!(c.option("Material"), Some("-"));
        assert_eq!(c.options[2].group, "Size");
    }

    #[test]
    fn test_unnamed_group_is_ignored_entirely() {
        let groups = vec![
            group("g1", "Color", &[("red", "Red")]),
            group("g2", "", &[("x", "X")]),
        ];
        let combinations = build_matrix(&groups, CombinationKeyMode::Sorted);
        assert_eq!(combinations.len(), 1);
        assert_eq!(combinations[0].options.len(), 1);
        assert_eq!(combinations[0].id, "red");
    }

    #[test]
    fn test_cleared_rows_are_skipped() {
        let mut groups = color_size();
        groups[0].values[0].value = String::new();
        let combinations = build_matrix(&groups, CombinationKeyMode::Positional);
        assert_eq!(titles(&combinations), vec!["Blue / S", "Blue / M"]);
    }

    #[test]
    fn test_value_order_follows_entry_order() {
        let mut groups = color_size();
        groups[0].values.swap(0, 1);
        let combinations = build_matrix(&groups, CombinationKeyMode::Positional);
        assert_eq!(
            titles(&combinations),
            vec!["Blue / S", "Blue / M", "Red / S", "Red / M"]
        );
    }

    #[test]
    fn test_generate_is_idempotent() {
        let groups = color_size();
        let first = generate_combinations(&groups, &[], CombinationKeyMode::Sorted);
        let second = generate_combinations(&groups, &first, CombinationKeyMode::Sorted);
        let third = generate_combinations(&groups, &second, CombinationKeyMode::Sorted);
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn test_cartesian_product_of_empty_axis() {
        let a = [1, 2];
        let axes: Vec<Vec<&i32>> = vec![a.iter().collect(), Vec::new()];
        assert!(cartesian_product(&axes).is_empty());
    }
}
