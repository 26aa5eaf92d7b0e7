//! Read-only projections over computed `Person` records.
//!
//! - [`ledger`]: every person with every recorded date
//! - [`outreach`]: people due a contact, sorted by last name

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Action, MemberType, Person};
use crate::utils::cmp_ignore_case;

/// Row order for the full ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerOrder {
    /// Same order as the export
    #[default]
    Input,
    /// Longest current absence first
    ByAbsence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger<'a> {
    /// Union of every person's date labels, in first-seen order
    pub dates: Vec<String>,
    pub people: Vec<&'a Person>,
}

pub fn ledger(people: &[Person], order: LedgerOrder) -> Ledger<'_> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut dates = Vec::new();
    for entry in people.iter().flat_map(|p| p.attendance.iter()) {
        if seen.insert(entry.date.as_str()) {
            dates.push(entry.date.clone());
        }
    }

    let mut rows: Vec<&Person> = people.iter().collect();
    if order == LedgerOrder::ByAbsence {
        // sort_by_key is stable, ties keep export order
        rows.sort_by_key(|p| {
            std::cmp::Reverse(p.current_weeks_absent().map(|w| w.wire_value()).unwrap_or(0))
        });
    }

    Ledger { dates, people: rows }
}

/// One line of the outreach list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct OutreachEntry {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "memberType")]
    pub member_type: MemberType,
    pub action: Action,
}

impl OutreachEntry {
    /// "Last, First" as shown in listings
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

impl From<&Person> for OutreachEntry {
    fn from(person: &Person) -> Self {
        Self {
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            member_type: person.member_type,
            action: person.action,
        }
    }
}

/// People with a pending action who have not already lapsed past the threshold.
pub fn outreach(people: &[Person]) -> Vec<OutreachEntry> {
    let mut entries: Vec<OutreachEntry> = people
        .iter()
        .filter(|p| p.needs_outreach())
        .map(OutreachEntry::from)
        .collect();
    entries.sort_by(|a, b| cmp_ignore_case(&a.last_name, &b.last_name));
    entries
}

/// Count of outreach entries per action, in report column order.
pub fn outreach_counts(entries: &[OutreachEntry]) -> Vec<(Action, usize)> {
    Action::OUTREACH
        .iter()
        .map(|action| (*action, entries.iter().filter(|e| e.action == *action).count()))
        .collect()
}
