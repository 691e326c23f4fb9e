use std::collections::HashSet;

use super::model::{ManagerRecord, ManagerTable, NumericColumn};

// ---------------------------------------------------------------------------
// Threshold filtering
// ---------------------------------------------------------------------------

/// One minimum-threshold predicate: keep rows where `column >= min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub column: NumericColumn,
    pub min: f64,
}

/// Apply the thresholds as a conjunction, in order, and return a fresh row
/// set. An empty list returns a copy of the full table. NaN never satisfies
/// `>=`, so rows with undefined derived metrics drop out once their column
/// is constrained.
pub fn filter_by_thresholds(table: &ManagerTable, thresholds: &[Threshold]) -> Vec<ManagerRecord> {
    table
        .records
        .iter()
        .filter(|rec| thresholds.iter().all(|t| t.column.value(rec) >= t.min))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Query search
// ---------------------------------------------------------------------------

/// Leading rows of the full table appended to every query result so the
/// matched manager(s) can be compared against peers.
pub const COMPARISON_SAMPLE_ROWS: usize = 10;

/// A rejected query. User input, not a fault: the UI shows the message and
/// keeps the previous results on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueryWarning {
    #[error("please enter an ID or name")]
    EmptyQuery,
    #[error("no matching data found, check your input")]
    NoMatch,
}

/// Case-sensitive substring search over registry ID and name.
///
/// Matches by ID come first, then matches by name, then the first
/// [`COMPARISON_SAMPLE_ROWS`] rows of the full table; duplicates are removed
/// by registry ID, first occurrence wins.
pub fn filter_by_query(
    table: &ManagerTable,
    query: &str,
) -> Result<Vec<ManagerRecord>, QueryWarning> {
    let query = query.trim();
    if query.is_empty() {
        return Err(QueryWarning::EmptyQuery);
    }

    let by_id: Vec<&ManagerRecord> = table
        .records
        .iter()
        .filter(|rec| rec.registry_id.contains(query))
        .collect();
    let by_name: Vec<&ManagerRecord> = table
        .records
        .iter()
        .filter(|rec| rec.name.contains(query))
        .collect();

    if by_id.is_empty() && by_name.is_empty() {
        return Err(QueryWarning::NoMatch);
    }

    let sample = table.records.iter().take(COMPARISON_SAMPLE_ROWS);
    let mut seen: HashSet<&str> = HashSet::new();
    let mut rows = Vec::new();
    for rec in by_id.into_iter().chain(by_name).chain(sample) {
        if seen.insert(rec.registry_id.as_str()) {
            rows.push(rec.clone());
        }
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// A non-empty query searches by ID/name and ignores every threshold;
/// otherwise the thresholds apply. The two modes are never combined.
pub fn filter(
    table: &ManagerTable,
    thresholds: &[Threshold],
    query: &str,
) -> Result<Vec<ManagerRecord>, QueryWarning> {
    if query.trim().is_empty() {
        Ok(filter_by_thresholds(table, thresholds))
    } else {
        filter_by_query(table, query)
    }
}

// ---------------------------------------------------------------------------
// Slider defaults and bounds
// ---------------------------------------------------------------------------

pub const SLIDER_STEP: f64 = 0.01;

/// Sliders start at the 15th percentile so the initial view already hides
/// the bottom tail.
const DEFAULT_QUANTILE: f64 = 0.15;

/// Range and starting value for one column's threshold slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    pub default: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Compute the slider range for a column from the observed values, skipping
/// NaN. An empty or all-NaN column degenerates to a zero range instead of
/// panicking.
pub fn slider_bounds(table: &ManagerTable, column: NumericColumn) -> SliderBounds {
    let mut values: Vec<f64> = table
        .records
        .iter()
        .map(|rec| column.value(rec))
        .filter(|v| !v.is_nan())
        .collect();

    if values.is_empty() {
        return SliderBounds {
            default: 0.0,
            min: 0.0,
            max: 0.0,
            step: SLIDER_STEP,
        };
    }

    values.sort_by(f64::total_cmp);
    SliderBounds {
        default: quantile_sorted(&values, DEFAULT_QUANTILE),
        min: values[0],
        max: values[values.len() - 1],
        step: SLIDER_STEP,
    }
}

/// Linear-interpolation quantile over an ascending, non-empty slice;
/// `q` in [0, 1].
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, avg_return: f64) -> ManagerRecord {
        ManagerRecord::from_raw(
            id.to_string(),
            name.to_string(),
            100.0,
            10.0,
            5.0,
            0.8,
            avg_return,
            avg_return + 0.01,
            -0.2,
        )
    }

    fn two_row_table() -> ManagerTable {
        ManagerTable::new(vec![
            record("A1", "张三", 0.08),
            record("A2", "李四", 0.12),
        ])
    }

    /// 14 rows so query results exercise the comparison sample cutoff.
    fn large_table() -> ManagerTable {
        let mut records: Vec<ManagerRecord> = (0..13)
            .map(|i| record(&format!("B{i:02}"), &format!("经理{i}"), 0.01 * i as f64))
            .collect();
        records.push(record("A1", "张三", 0.08));
        ManagerTable::new(records)
    }

    #[test]
    fn empty_thresholds_return_a_full_copy() {
        let table = two_row_table();
        let rows = filter_by_thresholds(&table, &[]);
        assert_eq!(rows, table.records);
    }

    #[test]
    fn threshold_keeps_rows_at_or_above_the_minimum() {
        let table = two_row_table();
        let rows = filter_by_thresholds(
            &table,
            &[Threshold {
                column: NumericColumn::AvgReturn,
                min: 0.10,
            }],
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].registry_id, "A2");
    }

    #[test]
    fn thresholds_apply_as_a_conjunction() {
        let table = two_row_table();
        let rows = filter_by_thresholds(
            &table,
            &[
                Threshold {
                    column: NumericColumn::AvgReturn,
                    min: 0.05,
                },
                Threshold {
                    column: NumericColumn::WeightedAvgReturn,
                    min: 0.13,
                },
            ],
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].registry_id, "A2");
    }

    #[test]
    fn raising_a_threshold_never_grows_the_result() {
        let table = large_table();
        let mut previous = table.len() + 1;
        for step in 0..=12 {
            let rows = filter_by_thresholds(
                &table,
                &[Threshold {
                    column: NumericColumn::AvgReturn,
                    min: 0.01 * step as f64,
                }],
            );
            assert!(rows.len() <= previous);
            previous = rows.len();
        }
    }

    #[test]
    fn nan_rows_fail_a_constrained_column() {
        let mut records = two_row_table().records;
        // zero attendance, avg AUM undefined
        records.push(ManagerRecord::from_raw(
            "A3".to_string(),
            "王五".to_string(),
            50.0,
            5.0,
            2.0,
            0.0,
            0.05,
            0.06,
            -0.3,
        ));
        let table = ManagerTable::new(records);
        let rows = filter_by_thresholds(
            &table,
            &[Threshold {
                column: NumericColumn::AvgAum,
                min: f64::MIN,
            }],
        );
        assert!(rows.iter().all(|rec| rec.registry_id != "A3"));
    }

    #[test]
    fn blank_query_is_rejected() {
        let table = two_row_table();
        assert_eq!(filter_by_query(&table, ""), Err(QueryWarning::EmptyQuery));
        assert_eq!(
            filter_by_query(&table, "   \t"),
            Err(QueryWarning::EmptyQuery)
        );
    }

    #[test]
    fn unmatched_query_is_rejected() {
        let table = two_row_table();
        assert_eq!(
            filter_by_query(&table, "zzz_no_such_value"),
            Err(QueryWarning::NoMatch)
        );
    }

    #[test]
    fn name_match_is_unioned_with_the_comparison_sample() {
        let table = large_table();
        let rows = filter_by_query(&table, "张").unwrap();

        // the match leads, followed by the first-10 sample
        assert_eq!(rows[0].registry_id, "A1");
        assert_eq!(rows.len(), 1 + COMPARISON_SAMPLE_ROWS);
        for (i, rec) in rows[1..].iter().enumerate() {
            assert_eq!(rec.registry_id, format!("B{i:02}"));
        }
    }

    #[test]
    fn duplicates_are_removed_by_registry_id() {
        let table = large_table();
        // B00 matches by ID and also sits in the comparison sample
        let rows = filter_by_query(&table, "B00").unwrap();
        assert_eq!(rows.len(), COMPARISON_SAMPLE_ROWS);
        assert_eq!(rows[0].registry_id, "B00");

        let mut ids: Vec<&str> = rows.iter().map(|r| r.registry_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), rows.len());
    }

    #[test]
    fn query_result_size_is_bounded() {
        let table = large_table();
        let query = "经理1";
        let by_id = table
            .records
            .iter()
            .filter(|r| r.registry_id.contains(query))
            .count();
        let by_name = table
            .records
            .iter()
            .filter(|r| r.name.contains(query))
            .count();
        let rows = filter_by_query(&table, query).unwrap();
        assert!(rows.len() <= by_id + by_name + COMPARISON_SAMPLE_ROWS);
    }

    #[test]
    fn non_empty_query_wins_the_dispatch() {
        let table = large_table();
        // a threshold that would empty the table must be ignored
        let thresholds = [Threshold {
            column: NumericColumn::AvgReturn,
            min: f64::INFINITY,
        }];
        let dispatched = filter(&table, &thresholds, "张三").unwrap();
        let direct = filter_by_query(&table, "张三").unwrap();
        assert_eq!(dispatched, direct);
        assert!(!dispatched.is_empty());
    }

    #[test]
    fn empty_query_dispatches_to_thresholds() {
        let table = two_row_table();
        let thresholds = [Threshold {
            column: NumericColumn::AvgReturn,
            min: 0.10,
        }];
        let rows = filter(&table, &thresholds, "  ").unwrap();
        assert_eq!(rows, filter_by_thresholds(&table, &thresholds));
    }

    #[test]
    fn slider_default_is_the_15th_percentile() {
        // avg returns 0.00 .. 0.12 over 13 evenly spaced rows of large_table,
        // plus 0.08 for the extra row; check against a hand-sorted copy
        let table = large_table();
        let mut values: Vec<f64> = table
            .records
            .iter()
            .map(|r| r.avg_return)
            .collect();
        values.sort_by(f64::total_cmp);

        let bounds = slider_bounds(&table, NumericColumn::AvgReturn);
        let pos = 0.15 * (values.len() - 1) as f64;
        let lo = pos.floor() as usize;
        let expected = values[lo] + (values[lo + 1] - values[lo]) * (pos - lo as f64);

        assert!((bounds.default - expected).abs() < 1e-12);
        assert_eq!(bounds.min, values[0]);
        assert_eq!(bounds.max, values[values.len() - 1]);
        assert_eq!(bounds.step, SLIDER_STEP);
    }

    #[test]
    fn slider_bounds_skip_nan_and_survive_degenerate_columns() {
        let mut records = two_row_table().records;
        records.push(ManagerRecord::from_raw(
            "A3".to_string(),
            "王五".to_string(),
            50.0,
            5.0,
            2.0,
            0.0,
            0.05,
            0.06,
            -0.3,
        ));
        let table = ManagerTable::new(records);
        let bounds = slider_bounds(&table, NumericColumn::AvgAum);
        assert!(!bounds.default.is_nan());
        assert!(bounds.min <= bounds.max);

        let empty = ManagerTable::new(Vec::new());
        let degenerate = slider_bounds(&empty, NumericColumn::AvgReturn);
        assert_eq!((degenerate.min, degenerate.max), (0.0, 0.0));
    }
}
