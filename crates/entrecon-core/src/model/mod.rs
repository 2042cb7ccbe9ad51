//! Value-typed domain models for the reconciliation pipeline.
//!
//! All entities here are transient: created by one reconciliation
//! invocation, immutable after construction, and never persisted.

pub mod canonical;
pub mod run;
pub mod value;

pub use canonical::CanonicalEntitlement;
pub use run::AggregatedRun;
pub use value::FieldValue;
