use crate::domain::model::{MonthRecord, RunRecord, WeekRecord};
use serde::Serialize;

/// Positional mapping from one sheet row to one output record.
///
/// Each sheet tab has its own fixed column layout, captured by one
/// implementation. `MIN_COLUMNS` is the narrowest row the mapping can
/// address and is checked before `transform` runs, so `transform`
/// itself never indexes out of bounds.
pub trait RowSchema {
    type Record: Serialize;

    /// JSON key holding the record sequence in the output envelope.
    const COLLECTION_KEY: &'static str;
    /// File name written under the output directory.
    const OUTPUT_FILE: &'static str;
    const MIN_COLUMNS: usize;

    fn transform(row: &[String]) -> Self::Record;
}

fn cell(row: &[String], index: usize) -> String {
    row[index].trim().to_string()
}

/// Raw sheet:
/// `date | weekday | time | duration | distance | pace | heartRate | cadence | ...`
/// The weekday label (index 1) and everything past index 7 are not
/// published.
pub struct RunSchema;

impl RowSchema for RunSchema {
    type Record = RunRecord;

    const COLLECTION_KEY: &'static str = "runs";
    const OUTPUT_FILE: &'static str = "recent-runs.json";
    const MIN_COLUMNS: usize = 8;

    fn transform(row: &[String]) -> RunRecord {
        RunRecord {
            date: cell(row, 0),
            time: cell(row, 2),
            duration: cell(row, 3),
            distance: cell(row, 4),
            pace: cell(row, 5),
            heart_rate: cell(row, 6),
            cadence: cell(row, 7),
        }
    }
}

/// Week sheet: `dateRange | summary | mon..sun` (columns 2 through 8).
/// `summary` and the per-day "distance/pace/heartRate" composites are
/// computed inside the spreadsheet; they pass through untouched.
pub struct WeekSchema;

impl RowSchema for WeekSchema {
    type Record = WeekRecord;

    const COLLECTION_KEY: &'static str = "weeks";
    const OUTPUT_FILE: &'static str = "weekly-overview.json";
    const MIN_COLUMNS: usize = 9;

    fn transform(row: &[String]) -> WeekRecord {
        WeekRecord {
            date_range: cell(row, 0),
            summary: cell(row, 1),
            days: std::array::from_fn(|day| cell(row, 2 + day)),
        }
    }
}

/// Month sheet:
/// `month | totalDistance | totalRuns | (dup) | totalDuration | fastestPace | longestDistance | maxAvgHR | maxCadence`
/// Column 3 duplicates the run count and is dropped. `totalDuration`
/// and `fastestPace` are spreadsheet-side aggregates, relayed as-is.
pub struct MonthSchema;

impl RowSchema for MonthSchema {
    type Record = MonthRecord;

    const COLLECTION_KEY: &'static str = "months";
    const OUTPUT_FILE: &'static str = "monthly-summary.json";
    const MIN_COLUMNS: usize = 9;

    fn transform(row: &[String]) -> MonthRecord {
        MonthRecord {
            month: cell(row, 0),
            total_distance: cell(row, 1),
            total_runs: cell(row, 2),
            total_duration: cell(row, 4),
            fastest_pace: cell(row, 5),
            longest_distance: cell(row, 6),
            max_avg_hr: cell(row, 7),
            max_cadence: cell(row, 8),
        }
    }
}
