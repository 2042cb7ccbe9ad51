//! Core types shared across the entitlement reconciliation facilities
//!
//! This crate provides the foundational vocabulary used by the normalizer,
//! aggregator and differ:
//!
//! - **Product categories**: the three entitlement families (models, data,
//!   apps) with their identity and comparison field lists
//! - **Schema constants**: canonical field identifiers and the ordered
//!   source-key alias tables used for schema-tolerant field resolution

pub mod category;
pub mod schema;

pub use category::ProductCategory;
pub use schema::CanonicalField;
