//! Entitlement Reconciliation Engine
//!
//! This crate consolidates the entitlement comparison logic previously
//! duplicated across the dashboard's audit views into one shared, pure
//! pipeline with three composable stages:
//! - Field normalization: schema-tolerant resolution of raw entitlement
//!   records into a canonical shape, with value normalization for comparison
//! - Interval aggregation: merging calendar-adjacent date ranges of the same
//!   logical entitlement line into single runs
//! - Snapshot diffing: added / removed / updated / unchanged classification
//!   between two aggregated snapshots, with per-field change attribution
//!
//! The engine performs no I/O and raises no errors on malformed field
//! values; anomalies degrade to the absent value or to added/removed
//! classifications. Payload extraction helpers carry the documented
//! degrade-to-empty policy for unparsable source payloads.

pub mod aggregate;
pub mod diff;
pub mod errors;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod payload;
pub mod pipeline;

// Re-export commonly used types
pub use aggregate::{aggregate_entitlements, AbsentDatePolicy, AggregateOptions};
pub use diff::{diff_runs, DiffEntry, DiffStatus};
pub use errors::{ReconError, Result};
pub use model::{AggregatedRun, CanonicalEntitlement, FieldValue};
pub use normalize::{normalize_value, resolve_entitlement};
pub use payload::EntitlementArrays;
pub use pipeline::{reconcile_category, reconcile_snapshots, ReconcileOptions, ReconciliationReport};
