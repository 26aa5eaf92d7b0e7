//! Rollcall core - attendance recency tracking for weekly exports.
//!
//! Takes the CSV export of a weekly attendance sheet (first name, last name,
//! percent, then one column per date) and works out, for every person, how
//! many weeks they have been absent, what kind of attendee they are, and
//! which outreach step is due.
//!
//! ```
//! use rollcall_core::{outreach, parse_csv, Action};
//!
//! let people = parse_csv("A,B,C,1/5/2025,1/12/2025,1/19/2025\nJo,Smith,,attended as member,,\n");
//! assert_eq!(people[0].action, Action::Text);
//! assert_eq!(outreach(&people).len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod models;
pub mod parser;
pub mod reports;
pub mod utils;

pub use config::Config;
pub use error::{ExportError, IngestError};
pub use export::{write_json, write_ledger, write_outreach, write_report_files, ReportFiles};
pub use ingest::{load_people, read_export};
pub use models::{Action, AttendanceEntry, MemberType, Person, WeeksAbsent};
pub use parser::{parse_attendance, parse_attendance_on, parse_csv};
pub use reports::{ledger, outreach, outreach_counts, Ledger, LedgerOrder, OutreachEntry};
