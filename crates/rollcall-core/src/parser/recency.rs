//! Attendance recency state machine.
//!
//! Each person row is replayed across the qualifying date columns as a fold
//! over [`RecencyState`]; the final state becomes an immutable [`Person`].

use crate::models::{Action, AttendanceEntry, MemberType, Person, WeeksAbsent};

use super::dates::DateColumn;
use super::tokenizer::cell;

/// Running counters for one person.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecencyState {
    pub weeks_absent: WeeksAbsent,
    pub seen_at_least_once: bool,
    pub member_type: MemberType,
    pub been_through_process: bool,
}

impl RecencyState {
    /// Advance one qualifying week given the raw (trimmed) cell value.
    pub fn step(self, value: &str) -> Self {
        let mut next = self;
        if value.is_empty() {
            next.weeks_absent = next.weeks_absent.missed();
        } else {
            next.weeks_absent = WeeksAbsent::attended();
            next.seen_at_least_once = true;
            if let Some(member_type) = MemberType::from_attendance_value(value) {
                next.member_type = member_type;
            }
        }
        if next.seen_at_least_once && next.weeks_absent.exceeds_threshold() {
            next.been_through_process = true;
        }
        next
    }
}

/// Run the recency pass for one data row.
pub fn track_person(row: &[String], columns: &[DateColumn]) -> Person {
    let (state, attendance) = columns.iter().fold(
        (RecencyState::default(), Vec::with_capacity(columns.len())),
        |(state, mut attendance), column| {
            let state = state.step(cell(row, column.index));
            attendance.push(AttendanceEntry {
                date: column.label.clone(),
                weeks_absent: state.weeks_absent,
            });
            (state, attendance)
        },
    );

    let action = attendance
        .last()
        .map(|entry: &AttendanceEntry| Action::from_weeks_absent(entry.weeks_absent))
        .unwrap_or_default();

    Person {
        first_name: cell(row, 0).to_string(),
        last_name: cell(row, 1).to_string(),
        member_type: state.member_type,
        been_through_process: state.been_through_process,
        action,
        attendance,
    }
}
