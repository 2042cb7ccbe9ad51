//! Diff computation over two aggregated snapshots.

use crate::diff::model::{DiffEntry, DiffStatus};
use crate::model::AggregatedRun;
use entrecon_core_types::ProductCategory;
use std::collections::{BTreeMap, BTreeSet};

/// Classify every distinct identity key across two aggregated snapshots.
///
/// Both sides are keyed by identity; when a key aggregated into more than
/// one run (non-adjacent intervals), the run with the earliest interval
/// represents the key — the aggregator emits runs in interval order, so the
/// choice is deterministic. Keys on both sides are compared over the
/// category's attribute field list using normalized-value equality; any
/// differing field is recorded, in list order, on the resulting `Updated`
/// entry.
///
/// Entries come back sorted by identity key. Callers that display by
/// product code re-sort for presentation.
pub fn diff_runs(
    previous: &[AggregatedRun],
    current: &[AggregatedRun],
    category: ProductCategory,
) -> Vec<DiffEntry> {
    let prev_by_key = index_by_key(previous);
    let cur_by_key = index_by_key(current);

    let keys: BTreeSet<&str> = prev_by_key
        .keys()
        .chain(cur_by_key.keys())
        .copied()
        .collect();

    let mut entries = Vec::with_capacity(keys.len());
    for key in keys {
        let entry = match (prev_by_key.get(key), cur_by_key.get(key)) {
            (Some(prev), None) => DiffEntry {
                identity_key: key.to_string(),
                product_code: prev.product_code.clone(),
                status: DiffStatus::Removed,
                previous: Some((*prev).clone()),
                current: None,
                changed_fields: Vec::new(),
            },
            (None, Some(cur)) => DiffEntry {
                identity_key: key.to_string(),
                product_code: cur.product_code.clone(),
                status: DiffStatus::Added,
                previous: None,
                current: Some((*cur).clone()),
                changed_fields: Vec::new(),
            },
            (Some(prev), Some(cur)) => {
                let changed_fields: Vec<_> = category
                    .comparable_fields()
                    .iter()
                    .copied()
                    .filter(|f| prev.field(*f) != cur.field(*f))
                    .collect();
                let status = if changed_fields.is_empty() {
                    DiffStatus::Unchanged
                } else {
                    DiffStatus::Updated
                };
                DiffEntry {
                    identity_key: key.to_string(),
                    product_code: cur.product_code.clone(),
                    status,
                    previous: Some((*prev).clone()),
                    current: Some((*cur).clone()),
                    changed_fields,
                }
            }
            (None, None) => unreachable!("key came from one of the two maps"),
        };
        entries.push(entry);
    }
    entries
}

/// Key runs by identity; first run wins on key collision.
fn index_by_key(runs: &[AggregatedRun]) -> BTreeMap<&str, &AggregatedRun> {
    let mut map = BTreeMap::new();
    for run in runs {
        map.entry(run.identity_key.as_str()).or_insert(run);
    }
    map
}
