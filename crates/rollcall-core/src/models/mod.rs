//! Data models for attendance records.
//!
//! - `Person`: one export row after the recency pass
//! - `AttendanceEntry`, `WeeksAbsent`: per-date absence state
//! - `MemberType`, `Action`: classification and recommended outreach

pub mod attendance;
pub mod person;

pub use attendance::{Action, AttendanceEntry, MemberType, WeeksAbsent, ESCALATION_THRESHOLD, NEVER_ATTENDED_WIRE};
pub use person::Person;
