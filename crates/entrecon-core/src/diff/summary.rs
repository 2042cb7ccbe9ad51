//! Human-readable summary renderer for a category's diff entries.

use crate::diff::model::{DiffEntry, DiffStatus};
use crate::model::{AggregatedRun, FieldValue};
use entrecon_core_types::ProductCategory;

/// Render a human-readable Markdown summary of one category's diff.
///
/// The summary is intended for review and audit displays. It is
/// informational only and does not affect the structured entries.
pub fn render_summary(category: ProductCategory, entries: &[DiffEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("## Entitlement Changes: {category}\n\n"));

    let count = |status: DiffStatus| entries.iter().filter(|e| e.status == status).count();
    out.push_str(&format!(
        "**Added**: {}  \n**Removed**: {}  \n**Updated**: {}  \n**Unchanged**: {}\n\n",
        count(DiffStatus::Added),
        count(DiffStatus::Removed),
        count(DiffStatus::Updated),
        count(DiffStatus::Unchanged),
    ));

    if entries
        .iter()
        .all(|e| e.status == DiffStatus::Unchanged)
    {
        out.push_str("_No entitlement changes detected._\n");
        return out;
    }

    for status in [DiffStatus::Added, DiffStatus::Removed, DiffStatus::Updated] {
        let section: Vec<&DiffEntry> = entries.iter().filter(|e| e.status == status).collect();
        if section.is_empty() {
            continue;
        }
        out.push_str(&format!("### {}\n\n", heading(status)));
        for entry in section {
            out.push_str(&render_entry(entry));
        }
        out.push('\n');
    }
    out
}

fn heading(status: DiffStatus) -> &'static str {
    match status {
        DiffStatus::Added => "Added",
        DiffStatus::Removed => "Removed",
        DiffStatus::Updated => "Updated",
        DiffStatus::Unchanged => "Unchanged",
    }
}

fn render_entry(entry: &DiffEntry) -> String {
    match entry.status {
        DiffStatus::Added => {
            let run = entry.current.as_ref();
            format!(
                "- `{}` {}\n",
                entry.identity_key,
                run.map(interval_label).unwrap_or_default()
            )
        }
        DiffStatus::Removed => {
            let run = entry.previous.as_ref();
            format!(
                "- `{}` {}\n",
                entry.identity_key,
                run.map(interval_label).unwrap_or_default()
            )
        }
        DiffStatus::Updated => {
            let changes: Vec<String> = entry
                .changed_fields
                .iter()
                .map(|f| {
                    let old = entry
                        .previous
                        .as_ref()
                        .map(|r| r.field(*f).clone())
                        .unwrap_or(FieldValue::Absent);
                    let new = entry
                        .current
                        .as_ref()
                        .map(|r| r.field(*f).clone())
                        .unwrap_or(FieldValue::Absent);
                    format!("{f}: {old} -> {new}")
                })
                .collect();
            format!("- `{}` {}\n", entry.identity_key, changes.join("; "))
        }
        DiffStatus::Unchanged => String::new(),
    }
}

fn interval_label(run: &AggregatedRun) -> String {
    format!("({} -> {})", run.start_date, run.end_date)
}
