//! Reconciliation pipeline: Normalizer -> Aggregator -> Differ.
//!
//! The whole pipeline is a pure, synchronous transform over two snapshots.
//! It performs no I/O, holds no shared state, and is safe to invoke
//! concurrently with different input pairs.

use crate::aggregate::{aggregate_entitlements, AggregateOptions};
use crate::diff::{diff_runs, DiffEntry, DiffStatus};
use crate::model::CanonicalEntitlement;
use crate::normalize::resolve_entitlement;
use crate::payload::EntitlementArrays;
use entrecon_core_types::ProductCategory;
use serde_json::Value;

/// Options for one reconciliation invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconcileOptions {
    /// Aggregation options (absent-date policy)
    pub aggregate: AggregateOptions,
}

/// Per-category diff entries for one reconciliation of two snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciliationReport {
    /// Model entitlement classification
    pub models: Vec<DiffEntry>,
    /// Data entitlement classification
    pub data: Vec<DiffEntry>,
    /// App entitlement classification
    pub apps: Vec<DiffEntry>,
}

impl ReconciliationReport {
    /// The entries for one category.
    pub fn for_category(&self, category: ProductCategory) -> &[DiffEntry] {
        match category {
            ProductCategory::Models => &self.models,
            ProductCategory::Data => &self.data,
            ProductCategory::Apps => &self.apps,
        }
    }

    /// True if no category has an added, removed or updated line.
    pub fn is_unchanged(&self) -> bool {
        ProductCategory::all().iter().all(|c| {
            self.for_category(*c)
                .iter()
                .all(|e| e.status == DiffStatus::Unchanged)
        })
    }
}

/// Reconcile one category: normalize both raw snapshots, aggregate each
/// independently, and diff the aggregated runs.
pub fn reconcile_category(
    category: ProductCategory,
    previous_raw: &[Value],
    current_raw: &[Value],
    options: &ReconcileOptions,
) -> Vec<DiffEntry> {
    let previous = normalize_snapshot(category, previous_raw);
    let current = normalize_snapshot(category, current_raw);

    let previous_runs = aggregate_entitlements(&previous, &options.aggregate);
    let current_runs = aggregate_entitlements(&current, &options.aggregate);

    let entries = diff_runs(&previous_runs, &current_runs, category);
    tracing::debug!(
        category = %category,
        previous_records = previous.len(),
        current_records = current.len(),
        previous_runs = previous_runs.len(),
        current_runs = current_runs.len(),
        entries = entries.len(),
        "reconciled category"
    );
    entries
}

/// Reconcile all three categories of two snapshots.
pub fn reconcile_snapshots(
    previous: &EntitlementArrays,
    current: &EntitlementArrays,
    options: &ReconcileOptions,
) -> ReconciliationReport {
    ReconciliationReport {
        models: reconcile_category(
            ProductCategory::Models,
            &previous.models,
            &current.models,
            options,
        ),
        data: reconcile_category(
            ProductCategory::Data,
            &previous.data,
            &current.data,
            options,
        ),
        apps: reconcile_category(
            ProductCategory::Apps,
            &previous.apps,
            &current.apps,
            options,
        ),
    }
}

fn normalize_snapshot(category: ProductCategory, raw: &[Value]) -> Vec<CanonicalEntitlement> {
    raw.iter()
        .map(|record| resolve_entitlement(record, category))
        .collect()
}
