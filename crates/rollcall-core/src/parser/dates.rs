use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

/// Leading header columns that never carry dates (first name, last name, percent).
pub const RESERVED_COLUMNS: usize = 3;

/// Weekday a column must fall on to take part in attendance tracking.
pub const MEETING_DAY: Weekday = Weekday::Sun;

/// A header column that participates in attendance tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateColumn {
    /// Position in the header (and in each data row)
    pub index: usize,
    pub label: String,
}

/// Parse an `mm/dd/yyyy` label. Month and day may be one or two digits.
pub fn parse_header_date(label: &str) -> Option<NaiveDate> {
    let mut parts = label.split('/').map(str::trim);
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Columns past the reserved prefix whose labels are valid dates on `weekday`,
/// in header order, first occurrence of each label only.
pub fn qualifying_columns(header: &[String], weekday: Weekday) -> Vec<DateColumn> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut columns = Vec::new();

    for (index, label) in header.iter().enumerate().skip(RESERVED_COLUMNS) {
        let Some(date) = parse_header_date(label) else {
            debug!(index, label = %label, "Skipping non-date column");
            continue;
        };
        if date.weekday() != weekday {
            debug!(index, label = %label, weekday = %date.weekday(), "Skipping off-day column");
            continue;
        }
        if !seen.insert(label.as_str()) {
            debug!(index, label = %label, "Skipping duplicate date column");
            continue;
        }
        columns.push(DateColumn { index, label: label.clone() });
    }

    columns
}
