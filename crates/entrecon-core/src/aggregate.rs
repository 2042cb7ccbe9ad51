//! Interval aggregator: merges calendar-adjacent date ranges.
//!
//! Records sharing an identity key are sorted by start date and walked once;
//! a record merges into the current run only on exact next-day adjacency
//! (`next.start == run.end + 1 day`). Overlaps and gaps both close the run:
//! this stage handles gapless sequential tiling only, never general interval
//! union. Genuine overlaps are a data-quality concern for the separate range
//! validator.
//!
//! The transform is pure and referentially transparent; callers re-run it
//! inside memoized view computations with identical results.

use crate::model::{AggregatedRun, CanonicalEntitlement, FieldValue};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// How records with an absent start or end date participate in aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbsentDatePolicy {
    /// Absent start sorts as the minimum calendar date and absent end as the
    /// maximum, keeping undated records orderable and mergeable under the
    /// same adjacency rule. Matches the historical dashboard behavior.
    #[default]
    SentinelBounds,
    /// A record missing either date always closes into its own
    /// single-record run and never merges.
    ExcludeFromMerge,
}

/// Aggregation options.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    /// Policy for records with absent start/end dates
    pub absent_dates: AbsentDatePolicy,
}

/// An in-progress run during the group walk.
struct OpenRun<'a> {
    first: &'a CanonicalEntitlement,
    end_value: FieldValue,
    end_effective: NaiveDate,
    count: usize,
}

/// Collapse a snapshot's records into the minimal set of aggregated runs.
///
/// Records are partitioned by identity key; each group is sorted ascending
/// by effective start date and merged on exact next-day adjacency. Output
/// order is deterministic: groups in identity-key order, runs within a
/// group in interval order. The sum of `merged_count` across a group's runs
/// always equals the group's input record count.
pub fn aggregate_entitlements(
    records: &[CanonicalEntitlement],
    options: &AggregateOptions,
) -> Vec<AggregatedRun> {
    let mut groups: BTreeMap<String, Vec<&CanonicalEntitlement>> = BTreeMap::new();
    for record in records {
        groups.entry(record.identity_key()).or_default().push(record);
    }

    let mut runs = Vec::new();
    for (key, mut group) in groups {
        group.sort_by_key(|r| (effective_start(r), effective_end(r)));

        let mut group_runs = Vec::new();
        let mut current: Option<OpenRun<'_>> = None;
        for record in group {
            let undated = record.start_date.is_absent() || record.end_date.is_absent();
            if options.absent_dates == AbsentDatePolicy::ExcludeFromMerge && undated {
                // Solo run; does not interrupt adjacency of dated records.
                group_runs.push(close_run(&key, open_run(record)));
                continue;
            }

            current = Some(match current.take() {
                Some(mut run) if is_adjacent(run.end_effective, effective_start(record)) => {
                    run.count += 1;
                    let incoming_end = effective_end(record);
                    if incoming_end > run.end_effective {
                        run.end_effective = incoming_end;
                        run.end_value = record.end_date.clone();
                    }
                    run
                }
                Some(run) => {
                    group_runs.push(close_run(&key, run));
                    open_run(record)
                }
                None => open_run(record),
            });
        }
        if let Some(run) = current.take() {
            group_runs.push(close_run(&key, run));
        }

        // Solo runs may close out of order relative to an open merged run;
        // re-sort so a group's runs always come out in interval order.
        group_runs.sort_by_key(|r| (run_effective_start(r), run_effective_end(r)));
        runs.extend(group_runs);
    }
    runs
}

/// Exact next-day adjacency test. A run ending at the sentinel maximum has
/// no successor day and never extends.
fn is_adjacent(run_end: NaiveDate, next_start: NaiveDate) -> bool {
    run_end.succ_opt() == Some(next_start)
}

fn open_run(record: &CanonicalEntitlement) -> OpenRun<'_> {
    OpenRun {
        first: record,
        end_value: record.end_date.clone(),
        end_effective: effective_end(record),
        count: 1,
    }
}

fn close_run(key: &str, run: OpenRun<'_>) -> AggregatedRun {
    AggregatedRun {
        identity_key: key.to_string(),
        category: run.first.category,
        product_code: run.first.product_code.clone(),
        product_modifier: run.first.product_modifier.clone(),
        package_name: run.first.package_name.clone(),
        quantity: run.first.quantity.clone(),
        start_date: run.first.start_date.clone(),
        end_date: run.end_value,
        merged_count: run.count,
    }
}

fn effective_start(record: &CanonicalEntitlement) -> NaiveDate {
    record.start_date.as_date().unwrap_or(NaiveDate::MIN)
}

fn effective_end(record: &CanonicalEntitlement) -> NaiveDate {
    record.end_date.as_date().unwrap_or(NaiveDate::MAX)
}

fn run_effective_start(run: &AggregatedRun) -> NaiveDate {
    run.start_date.as_date().unwrap_or(NaiveDate::MIN)
}

fn run_effective_end(run: &AggregatedRun) -> NaiveDate {
    run.end_date.as_date().unwrap_or(NaiveDate::MAX)
}
