//! Snapshot differ.
//!
//! Compares two aggregated entitlement snapshots for one category and
//! classifies every distinct identity key as added, removed, updated or
//! unchanged, with per-field change attribution for updated lines.
//!
//! ## Entry point
//!
//! ```ignore
//! use entrecon_core::diff::diff_runs;
//!
//! let entries = diff_runs(&previous_runs, &current_runs, category);
//! let summary = entrecon_core::diff::render_summary(category, &entries);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical snapshot pairs produce identical entries,
//!   independent of input array order
//! - **Completeness**: every identity key seen on either side appears in
//!   exactly one entry
//! - **No errors**: empty sides are valid input and classify as all-added
//!   or all-removed

pub mod engine;
pub mod model;
pub mod summary;

pub use engine::diff_runs;
pub use model::{DiffEntry, DiffStatus};
pub use summary::render_summary;
