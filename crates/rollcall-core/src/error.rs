use std::path::PathBuf;

use thiserror::Error;

/// Reasons an export is rejected before parsing starts.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Not a CSV file: {}", .0.display())]
    NotCsv(PathBuf),

    #[error("Export is empty: {}", .0.display())]
    Empty(PathBuf),

    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while writing reports.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
