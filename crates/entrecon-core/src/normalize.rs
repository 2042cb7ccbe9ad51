//! Field normalizer: schema-tolerant resolution and value normalization.
//!
//! Both functions here are pure and never fail the caller: unparsable dates
//! and numbers degrade to [`FieldValue::Absent`], so a single malformed
//! record cannot abort reconciliation of an entire snapshot.

use crate::model::{CanonicalEntitlement, FieldValue};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use entrecon_core_types::{CanonicalField, ProductCategory};
use serde_json::Value;

/// Normalize one raw JSON value for comparison.
///
/// Rules, applied in order:
/// 1. null or empty/whitespace-only string → `Absent`
/// 2. if `is_date`: parse a calendar date, time-of-day discarded;
///    unparsable → `Absent`
/// 3. numeric string → number
/// 4. other string → trimmed text
/// 5. native numbers and booleans pass through; structured values
///    (arrays, objects) are never legal field values and degrade to `Absent`
pub fn normalize_value(value: &Value, is_date: bool) -> FieldValue {
    match value {
        Value::Null => FieldValue::Absent,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return FieldValue::Absent;
            }
            if is_date {
                return match parse_calendar_date(trimmed) {
                    Some(d) => FieldValue::Date(d),
                    None => FieldValue::Absent,
                };
            }
            match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() => FieldValue::Number(n),
                _ => FieldValue::Text(trimmed.to_string()),
            }
        }
        Value::Number(n) => {
            if is_date {
                // Dates only ever arrive as strings; a numeric date is noise.
                return FieldValue::Absent;
            }
            n.as_f64()
                .map(FieldValue::Number)
                .unwrap_or(FieldValue::Absent)
        }
        Value::Bool(b) => {
            if is_date {
                FieldValue::Absent
            } else {
                FieldValue::Bool(*b)
            }
        }
        Value::Array(_) | Value::Object(_) => FieldValue::Absent,
    }
}

/// Parse a calendar date from the formats observed across both source
/// systems. Time-of-day and offset information is discarded.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return Some(d);
    }
    None
}

/// Resolve one raw entitlement record into the canonical shape for its
/// category.
///
/// For each canonical field the ordered alias table is tried and the first
/// present, non-null source value is normalized. Missing and extra keys are
/// tolerated; a record that is not a JSON object resolves to all-absent.
/// `package_name` and `quantity` are only resolved for the apps category.
pub fn resolve_entitlement(record: &Value, category: ProductCategory) -> CanonicalEntitlement {
    let is_apps = category == ProductCategory::Apps;
    CanonicalEntitlement {
        category,
        product_code: resolve_field(record, CanonicalField::ProductCode),
        product_modifier: resolve_field(record, CanonicalField::ProductModifier),
        package_name: if is_apps {
            resolve_field(record, CanonicalField::PackageName)
        } else {
            FieldValue::Absent
        },
        quantity: if is_apps {
            resolve_field(record, CanonicalField::Quantity)
        } else {
            FieldValue::Absent
        },
        start_date: resolve_field(record, CanonicalField::StartDate),
        end_date: resolve_field(record, CanonicalField::EndDate),
    }
}

/// Try the field's alias table in order and normalize the first present,
/// non-null value.
fn resolve_field(record: &Value, field: CanonicalField) -> FieldValue {
    let Some(obj) = record.as_object() else {
        return FieldValue::Absent;
    };
    for alias in field.aliases() {
        if let Some(raw) = obj.get(*alias) {
            if !raw.is_null() {
                return normalize_value(raw, field.is_date());
            }
        }
    }
    FieldValue::Absent
}
