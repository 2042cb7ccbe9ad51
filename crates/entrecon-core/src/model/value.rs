//! Normalized field values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A normalized scalar field value.
///
/// `Absent` is a first-class value distinct from every real value; it is
/// never represented as the empty string. Equality on `FieldValue` is the
/// comparison used for diff attribution, so `"5"` (coerced to a number at
/// normalization time) and `5` compare equal, as do two equivalent date
/// strings in different source formats.
///
/// Serialization is untagged so values render as plain JSON scalars in
/// report output. Deserialization is consequently lossy on variant
/// identity: variants are tried in declaration order, so `Text` holding a
/// date-shaped string comes back as `Date`. Pipeline input never takes
/// this path (fields are normalized from raw JSON, not deserialized), so
/// the asymmetry only affects re-reading serialized report output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Missing, null, empty-string or unparsable input
    Absent,
    /// A calendar date (time-of-day discarded at parse time)
    Date(NaiveDate),
    /// A number, either native or coerced from a numeric string
    Number(f64),
    /// A boolean passed through unchanged
    Bool(bool),
    /// A trimmed string
    Text(String),
}

impl FieldValue {
    /// True if this value is the absent sentinel.
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// The calendar date, if this value holds one.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Deterministic rendering used as an identity-key segment.
    ///
    /// Absent renders as the empty segment; this is a key-encoding detail
    /// only and does not violate the "absent is never the empty string"
    /// invariant on field values themselves.
    pub fn key_segment(&self) -> String {
        match self {
            FieldValue::Absent => String::new(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Absent => f.write_str("(absent)"),
            other => f.write_str(&other.key_segment()),
        }
    }
}

/// Render a number without a trailing `.0` for integral values.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
