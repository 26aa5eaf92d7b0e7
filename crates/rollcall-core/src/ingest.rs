//! Reading an attendance export from disk.
//!
//! Only structural problems are rejected here (wrong file type, unreadable,
//! nothing in it). Anything that tokenizes is handed to the parser as-is.

use std::path::Path;

use tracing::{debug, info};

use crate::error::IngestError;
use crate::models::Person;
use crate::parser::parse_csv;

/// Check that `path` names a CSV file by extension.
pub fn ensure_csv_path(path: &Path) -> Result<(), IngestError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        Ok(())
    } else {
        Err(IngestError::NotCsv(path.to_path_buf()))
    }
}

/// Read an export into memory, rejecting non-CSV and blank files.
pub fn read_export(path: &Path) -> Result<String, IngestError> {
    ensure_csv_path(path)?;

    let bytes = std::fs::read(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // Exports from spreadsheet tools are not always UTF-8; bad bytes become U+FFFD
    let text = String::from_utf8_lossy(&bytes).into_owned();
    if text.trim().is_empty() {
        return Err(IngestError::Empty(path.to_path_buf()));
    }

    debug!(path = %path.display(), bytes = text.len(), "Read attendance export");
    Ok(text)
}

/// Read and parse an export in one step.
pub fn load_people(path: &Path) -> Result<Vec<Person>, IngestError> {
    let text = read_export(path)?;
    let people = parse_csv(&text);
    info!(path = %path.display(), people = people.len(), "Parsed attendance export");
    Ok(people)
}
