//! Carry entered data across regenerations
//!
//! Rows are matched purely by combination id. A row whose id survives keeps
//! its price, quantity, SKU, weight and unit; new rows start empty; rows that
//! no longer exist are dropped.

use shared::models::{Combination, CombinationFields};
use std::collections::{HashMap, HashSet};

/// Outcome counts of one reconciliation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Rows whose entered data was carried over
    pub kept: usize,
    /// Rows with no previous counterpart
    pub created: usize,
    /// Previous rows that no longer exist
    pub dropped: usize,
}

#[derive(Debug, Clone)]
pub struct Reconciled {
    pub combinations: Vec<Combination>,
    pub report: ReconcileReport,
}

/// Merge `previous` field data into freshly generated rows
pub fn reconcile(fresh: Vec<Combination>, previous: &[Combination]) -> Reconciled {
    let prior: HashMap<&str, &CombinationFields> = previous
        .iter()
        .map(|c| (c.id.as_str(), &c.fields))
        .collect();

    let mut report = ReconcileReport::default();
    let combinations: Vec<Combination> = fresh
        .into_iter()
        .map(|mut combination| {
            match prior.get(combination.id.as_str()) {
                Some(fields) => {
                    combination.fields = (*fields).clone();
                    report.kept += 1;
                }
                None => report.created += 1,
            }
            combination
        })
        .collect();

    let current: HashSet<&str> = combinations.iter().map(|c| c.id.as_str()).collect();
    report.dropped = prior.keys().filter(|id| !current.contains(*id)).count();

    tracing::debug!(
        kept = report.kept,
        created = report.created,
        dropped = report.dropped,
        "Reconciled variant combinations"
    );

    Reconciled {
        combinations,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::WeightUnit;

    fn row(id: &str) -> Combination {
        Combination {
            id: id.into(),
            value_ids: id.split('-').map(String::from).collect(),
            options: Vec::new(),
            fields: CombinationFields::default(),
        }
    }

    fn priced(id: &str, price: &str) -> Combination {
        let mut c = row(id);
        c.fields = CombinationFields {
            price: price.into(),
            quantity: "3".into(),
            sku: format!("SKU-{id}"),
            weight: "1.5".into(),
            weight_unit: WeightUnit::Kilogram,
        };
        c
    }

    #[test]
    fn test_matching_rows_keep_all_fields() {
        let previous = vec![priced("red-s", "10.00")];
        let out = reconcile(vec![row("red-s"), row("red-m")], &previous);

        assert_eq!(out.combinations[0].fields, previous[0].fields);
        assert!(out.combinations[1].fields.is_empty());
        assert_eq!(
            out.report,
            ReconcileReport {
                kept: 1,
                created: 1,
                dropped: 0
            }
        );
    }

    #[test]
    fn test_stale_rows_are_dropped() {
        let previous = vec![priced("red-s", "10.00"), priced("blue-s", "12.00")];
        let out = reconcile(vec![row("red-s")], &previous);

        assert_eq!(out.combinations.len(), 1);
        assert_eq!(out.combinations[0].fields.price, "10.00");
        assert_eq!(out.report.dropped, 1);
    }

    #[test]
    fn test_empty_fresh_drops_everything() {
        let previous = vec![priced("a", "1"), priced("b", "2")];
        let out = reconcile(Vec::new(), &previous);
        assert!(out.combinations.is_empty());
        assert_eq!(out.report.dropped, 2);
    }

    #[test]
    fn test_fresh_order_wins() {
        let previous = vec![priced("b", "2"), priced("a", "1")];
        let out = reconcile(vec![row("a"), row("b")], &previous);
        let ids: Vec<&str> = out.combinations.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(out.combinations[0].fields.price, "1");
    }

    #[test]
    fn test_malformed_values_carried_verbatim() {
        let previous = vec![priced("a", "ten dollars")];
        let out = reconcile(vec![row("a")], &previous);
        assert_eq!(out.combinations[0].fields.price, "ten dollars");
    }
}
