//! CSV and JSON serialization of the report projections.
//!
//! The ledger writes `"0"` for a date a person has no entry for. That is
//! indistinguishable from an actual zero-week absence; downstream
//! spreadsheets rely on this, so it is kept.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExportError;
use crate::models::{Action, Person};
use crate::reports::{ledger, outreach, Ledger, LedgerOrder, OutreachEntry};
use crate::utils::capitalize;

/// Placeholder for a ledger date the person has no entry for
pub const MISSING_DATE_VALUE: &str = "0";

const LEDGER_COLUMNS: [&str; 5] = ["FirstName", "LastName", "MemberType", "BeenThroughProcess", "Action"];
const OUTREACH_COLUMNS: [&str; 3] = ["FirstName", "LastName", "MemberType"];

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

pub fn write_ledger<W: Write>(ledger: &Ledger<'_>, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv_writer(writer);

    let header: Vec<&str> = LEDGER_COLUMNS
        .iter()
        .copied()
        .chain(ledger.dates.iter().map(String::as_str))
        .collect();
    wtr.write_record(&header)?;

    for person in &ledger.people {
        let mut record = vec![
            person.first_name.clone(),
            person.last_name.clone(),
            person.member_type.to_string(),
            person.been_through_process.to_string(),
            person.action.to_string(),
        ];
        record.extend(ledger.dates.iter().map(|date| {
            person
                .weeks_absent_on(date)
                .map(|w| w.wire_value().to_string())
                .unwrap_or_else(|| MISSING_DATE_VALUE.to_string())
        }));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_outreach<W: Write>(entries: &[OutreachEntry], writer: W) -> Result<(), ExportError> {
    let mut wtr = csv_writer(writer);

    let header: Vec<&str> = OUTREACH_COLUMNS
        .iter()
        .copied()
        .chain(Action::OUTREACH.iter().map(Action::column_name))
        .collect();
    wtr.write_record(&header)?;

    for entry in entries {
        let mut record = vec![
            entry.first_name.clone(),
            entry.last_name.clone(),
            entry.member_type.to_string(),
        ];
        // One-hot: the matching column carries the label, the rest stay blank
        record.extend(Action::OUTREACH.iter().map(|action| {
            if *action == entry.action {
                capitalize(action.label())
            } else {
                String::new()
            }
        }));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Pretty-printed JSON view of every person record.
pub fn write_json<W: Write>(people: &[Person], writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, people)?;
    Ok(())
}

/// Where [`write_report_files`] put its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    pub ledger: PathBuf,
    pub outreach: PathBuf,
    pub people: usize,
    pub outreach_entries: usize,
}

/// Write the ledger and outreach CSVs into `out_dir`.
pub fn write_report_files(
    people: &[Person],
    out_dir: &Path,
    ledger_file_name: &str,
    outreach_file_name: &str,
    order: LedgerOrder,
) -> Result<ReportFiles, ExportError> {
    std::fs::create_dir_all(out_dir)?;

    let ledger_path = out_dir.join(ledger_file_name);
    write_ledger(&ledger(people, order), File::create(&ledger_path)?)?;

    let entries = outreach(people);
    let outreach_path = out_dir.join(outreach_file_name);
    write_outreach(&entries, File::create(&outreach_path)?)?;

    info!(
        ledger = %ledger_path.display(),
        outreach = %outreach_path.display(),
        people = people.len(),
        outreach_entries = entries.len(),
        "Wrote reports"
    );

    Ok(ReportFiles {
        ledger: ledger_path,
        outreach: outreach_path,
        people: people.len(),
        outreach_entries: entries.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_csv;

    fn render_ledger(people: &[Person], order: LedgerOrder) -> String {
        let mut buf = Vec::new();
        write_ledger(&ledger(people, order), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn render_outreach(people: &[Person]) -> String {
        let mut buf = Vec::new();
        write_outreach(&outreach(people), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_ledger_csv() {
        let people = parse_csv(
            "FirstName,LastName,Percent,1/5/2025,1/12/2025\n\
             Jo,Smith,50%,attended as member,\n\
             Al,Lee,0%,,\n",
        );
        let csv = render_ledger(&people, LedgerOrder::Input);
        assert_eq!(
            csv,
            "FirstName,LastName,MemberType,BeenThroughProcess,Action,1/5/2025,1/12/2025\n\
             Jo,Smith,member,false,,0,1\n\
             Al,Lee,n/a,false,,99,99\n"
        );
    }

    #[test]
    fn test_ledger_csv_missing_dates_are_zero() {
        let mut people = parse_csv("A,B,C,1/5/2025,1/12/2025\nJo,Smith,,,attended as member\n");
        // A record built elsewhere with fewer dates than the ledger
        people.push(Person {
            first_name: "Al".into(),
            last_name: "Lee".into(),
            member_type: Default::default(),
            been_through_process: false,
            action: Default::default(),
            attendance: Vec::new(),
        });
        let csv = render_ledger(&people, LedgerOrder::Input);
        let last = csv.lines().last().unwrap();
        assert_eq!(last, "Al,Lee,n/a,false,,0,0");
    }

    #[test]
    fn test_ledger_csv_by_absence() {
        let people = parse_csv(
            "A,B,C,1/5/2025,1/12/2025,1/19/2025\n\
             Jo,Smith,,attended as member,,\n\
             Al,Lee,,,,\n\
             Bo,Ray,,attended as leader,attended as leader,\n",
        );
        let csv = render_ledger(&people, LedgerOrder::ByAbsence);
        let names: Vec<&str> = csv.lines().skip(1).map(|l| l.split(',').next().unwrap()).collect();
        assert_eq!(names, vec!["Al", "Jo", "Bo"]);
        assert!(csv.contains("Jo,Smith,member,false,text,0,1,2\n"));
    }

    #[test]
    fn test_outreach_csv() {
        let people = parse_csv(
            "A,B,C,1/5/2025,1/12/2025,1/19/2025,1/26/2025,2/2/2025,2/9/2025\n\
             Zoe,young,,attended as visitor,,,,,\n\
             Max,Adams,,,,attended as member,,,\n\
             Ann,Brown,,attended as leader,,,,,attended as leader\n\
             Sam,Cole,,attended as member,,,,,\n",
        );
        let csv = render_outreach(&people);
        assert_eq!(
            csv,
            "FirstName,LastName,MemberType,Text,PostCard,PhoneCall,Visit\n\
             Max,Adams,member,,Post card,,\n\
             Sam,Cole,member,,,,Visit\n\
             Zoe,young,visitor,,,,Visit\n"
        );
    }

    #[test]
    fn test_outreach_csv_empty() {
        let csv = render_outreach(&[]);
        assert_eq!(csv, "FirstName,LastName,MemberType,Text,PostCard,PhoneCall,Visit\n");
    }

    #[test]
    fn test_write_json() {
        let people = parse_csv("A,B,C,1/5/2025\nJo,Smith,,attended as member\n");
        let mut buf = Vec::new();
        write_json(&people, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["lastName"], "Smith");
        assert_eq!(value[0]["attendance"][0]["date"], "1/5/2025");
        assert_eq!(value[0]["attendance"][0]["weeksAbsent"], 0);
    }
}
