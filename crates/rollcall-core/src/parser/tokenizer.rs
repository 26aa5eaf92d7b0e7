//! Plain comma-separated tokenizer.
//!
//! No quoting or escaping is recognized: every comma is a delimiter.
//! Blank lines are dropped and every field is trimmed.

/// Header fields plus data rows, both already trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Split raw export text into a header row and data rows.
pub fn tokenize(text: &str) -> CsvTable {
    let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());

    let header = match lines.next() {
        Some(line) => split_fields(line),
        None => return CsvTable::default(),
    };
    let rows = lines.map(split_fields).collect();

    CsvTable { header, rows }
}

pub fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|field| field.trim().to_string()).collect()
}

/// Field at `index`, or empty when the row is short.
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}
