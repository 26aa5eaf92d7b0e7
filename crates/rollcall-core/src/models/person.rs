use serde::{Deserialize, Serialize};

use super::attendance::{Action, AttendanceEntry, MemberType, WeeksAbsent};

/// One row of the attendance export after the recency pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct Person {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "memberType")]
    pub member_type: MemberType,
    #[serde(rename = "beenThroughProcess")]
    pub been_through_process: bool,
    pub action: Action,
    // Order matters: the last entry drives `action`
    pub attendance: Vec<AttendanceEntry>,
}

impl Person {
    pub fn last_entry(&self) -> Option<&AttendanceEntry> {
        self.attendance.last()
    }

    /// Absence state at the most recent qualifying date, if any.
    pub fn current_weeks_absent(&self) -> Option<WeeksAbsent> {
        self.last_entry().map(|e| e.weeks_absent)
    }

    pub fn weeks_absent_on(&self, date: &str) -> Option<WeeksAbsent> {
        self.attendance
            .iter()
            .find(|e| e.date == date)
            .map(|e| e.weeks_absent)
    }

    pub fn needs_outreach(&self) -> bool {
        !self.been_through_process && !self.action.is_none()
    }
}
