use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire value written for a person who has never been marked present.
pub const NEVER_ATTENDED_WIRE: u32 = 99;

/// Absence streak past which a person is considered handled by the outreach process.
pub const ESCALATION_THRESHOLD: u32 = 5;

/// Running absence state for one person at one qualifying date.
///
/// Serializes to a bare integer: `AbsentFor(n)` as `n`, `NeverAttended` as `99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeeksAbsent {
    #[default]
    NeverAttended,
    AbsentFor(u32),
}

impl WeeksAbsent {
    /// State after a week with an attendance value.
    pub fn attended() -> Self {
        WeeksAbsent::AbsentFor(0)
    }

    /// State after a week with no attendance value.
    /// Never-attended stays never-attended; a streak grows by one until it
    /// reaches the wire cap of 99, where it stays.
    pub fn missed(self) -> Self {
        match self {
            WeeksAbsent::NeverAttended => WeeksAbsent::NeverAttended,
            WeeksAbsent::AbsentFor(n) if n >= NEVER_ATTENDED_WIRE => WeeksAbsent::AbsentFor(n),
            WeeksAbsent::AbsentFor(n) => WeeksAbsent::AbsentFor(n + 1),
        }
    }

    pub fn wire_value(&self) -> u32 {
        match self {
            WeeksAbsent::NeverAttended => NEVER_ATTENDED_WIRE,
            WeeksAbsent::AbsentFor(n) => *n,
        }
    }

    pub fn from_wire(value: u32) -> Self {
        if value == NEVER_ATTENDED_WIRE {
            WeeksAbsent::NeverAttended
        } else {
            WeeksAbsent::AbsentFor(value)
        }
    }

    /// True once the streak is longer than the escalation threshold.
    /// Never-attended people are never past it.
    pub fn exceeds_threshold(&self) -> bool {
        matches!(self, WeeksAbsent::AbsentFor(n) if *n > ESCALATION_THRESHOLD)
    }
}

impl std::fmt::Display for WeeksAbsent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_value())
    }
}

impl Serialize for WeeksAbsent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.wire_value())
    }
}

impl<'de> Deserialize<'de> for WeeksAbsent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(WeeksAbsent::from_wire)
    }
}

/// Membership classification taken from the most recent attendance value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum MemberType {
    #[default]
    #[serde(rename = "n/a")]
    Unknown,
    #[serde(rename = "member")]
    Member,
    #[serde(rename = "visitor")]
    Visitor,
    #[serde(rename = "leader")]
    Leader,
}

impl MemberType {
    /// Exact-match classification of a raw attendance cell.
    /// Returns `None` for values that carry no classification.
    pub fn from_attendance_value(value: &str) -> Option<Self> {
        match value {
            "attended as member" => Some(MemberType::Member),
            "attended as visitor" => Some(MemberType::Visitor),
            "attended as leader" => Some(MemberType::Leader),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MemberType::Unknown => "n/a",
            MemberType::Member => "member",
            MemberType::Visitor => "visitor",
            MemberType::Leader => "leader",
        }
    }
}

impl std::fmt::Display for MemberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Recommended outreach step for the current absence streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum Action {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "post card")]
    PostCard,
    #[serde(rename = "phone call")]
    PhoneCall,
    #[serde(rename = "visit")]
    Visit,
}

impl Action {
    /// Outreach columns in report order.
    pub const OUTREACH: [Action; 4] = [Action::Text, Action::PostCard, Action::PhoneCall, Action::Visit];

    pub fn from_weeks_absent(weeks: WeeksAbsent) -> Self {
        match weeks {
            WeeksAbsent::AbsentFor(2) => Action::Text,
            WeeksAbsent::AbsentFor(3) => Action::PostCard,
            WeeksAbsent::AbsentFor(4) => Action::PhoneCall,
            WeeksAbsent::AbsentFor(5) => Action::Visit,
            _ => Action::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::None => "",
            Action::Text => "text",
            Action::PostCard => "post card",
            Action::PhoneCall => "phone call",
            Action::Visit => "visit",
        }
    }

    /// Column heading used by the outreach report.
    pub fn column_name(&self) -> &'static str {
        match self {
            Action::None => "",
            Action::Text => "Text",
            Action::PostCard => "PostCard",
            Action::PhoneCall => "PhoneCall",
            Action::Visit => "Visit",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One qualifying date and the absence state recorded against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct AttendanceEntry {
    pub date: String,
    #[serde(rename = "weeksAbsent")]
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub weeks_absent: WeeksAbsent,
}
