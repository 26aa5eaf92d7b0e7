//! Attendance export parsing.
//!
//! Raw text goes through the [`tokenizer`], the header through the
//! [`dates`] filter, and each data row through the [`recency`] state machine.

pub mod dates;
pub mod recency;
pub mod tokenizer;

use chrono::Weekday;
use tracing::debug;

use crate::models::Person;

pub use dates::{qualifying_columns, DateColumn, MEETING_DAY};
pub use recency::{track_person, RecencyState};
pub use tokenizer::{tokenize, CsvTable};

/// Compute one `Person` per data row, tracking Sunday columns.
pub fn parse_attendance(header: &[String], rows: &[Vec<String>]) -> Vec<Person> {
    parse_attendance_on(header, rows, MEETING_DAY)
}

/// Same as [`parse_attendance`] for a different meeting day.
pub fn parse_attendance_on(header: &[String], rows: &[Vec<String>], weekday: Weekday) -> Vec<Person> {
    let columns = qualifying_columns(header, weekday);
    debug!(
        header_columns = header.len(),
        date_columns = columns.len(),
        rows = rows.len(),
        "Tracking attendance"
    );
    rows.iter().map(|row| track_person(row, &columns)).collect()
}

/// Tokenize raw export text and run the recency pass over it.
pub fn parse_csv(text: &str) -> Vec<Person> {
    let table = tokenize(text);
    parse_attendance(&table.header, &table.rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, MemberType};

    const EXPORT: &str = "FirstName,LastName,Percent,1/5/2025,1/12/2025\n\
                          Jo,Smith,50%,attended as member,\n\
                          Al,Lee,0%,,\n";

    #[test]
    fn test_parse_csv_one_person_per_row() {
        let people = parse_csv(EXPORT);
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].member_type, MemberType::Member);
        assert_eq!(people[1].member_type, MemberType::Unknown);
        assert!(people.iter().all(|p| p.attendance.len() == 2));
    }

    #[test]
    fn test_header_only() {
        assert!(parse_csv("FirstName,LastName,Percent,1/5/2025").is_empty());
        assert!(parse_csv("").is_empty());
    }

    #[test]
    fn test_other_meeting_day() {
        // 1/8/2025 is a Wednesday
        let people = parse_csv("A,B,C,1/5/2025,1/8/2025\nJo,Smith,,,attended as leader");
        assert_eq!(people[0].attendance.len(), 1);

        let table = tokenize("A,B,C,1/5/2025,1/8/2025\nJo,Smith,,,attended as leader");
        let people = parse_attendance_on(&table.header, &table.rows, Weekday::Wed);
        assert_eq!(people[0].attendance.len(), 1);
        assert_eq!(people[0].attendance[0].date, "1/8/2025");
        assert_eq!(people[0].member_type, MemberType::Leader);
        assert_eq!(people[0].action, Action::None);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let people = parse_csv("A,B,C,1/5/2025\nJo,Smith,,x\nJo,Smith,,");
        assert_eq!(people.len(), 2);
        assert_ne!(people[0], people[1]);
    }
}
