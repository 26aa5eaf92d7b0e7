//! Rollcall - turns a weekly attendance export into reports.
//!
//! Reads one CSV export, works out each person's absence streak and
//! outreach step, then writes the full ledger and the outreach list.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rollcall_core::utils::truncate;
use rollcall_core::{
    load_people, outreach, outreach_counts, write_json, write_report_files, Config, LedgerOrder, Person,
};

// ============================================================================
// Constants
// ============================================================================

/// Column width for names in the summary table
const NAME_WIDTH: usize = 24;

/// Command-line arguments for rollcall
#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(about = "Attendance ledger and outreach list from a weekly attendance export")]
#[command(version)]
struct Args {
    /// Attendance export (CSV)
    input: PathBuf,

    /// Directory for the report files
    #[arg(short, long, env = "ROLLCALL_OUT_DIR")]
    out_dir: Option<PathBuf>,

    /// Sort the ledger by current weeks absent, longest first
    #[arg(long)]
    sort_by_absence: bool,

    /// Print every person record as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Print the outreach list as a table to stdout
    #[arg(long)]
    summary: bool,

    /// Do not write report files
    #[arg(long)]
    no_files: bool,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Initialize the tracing subscriber for logging.
/// The returned guard must be held until exit so the file writer flushes.
fn init_tracing(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("Invalid log file path: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    Ok(guard)
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => Config::load_from(p),
        None => Config::load(),
    }
}

fn print_summary(people: &[Person], out: &mut impl Write) -> Result<()> {
    let entries = outreach(people);
    writeln!(out, "{} people, {} due for outreach", people.len(), entries.len())?;
    for (action, count) in outreach_counts(&entries) {
        writeln!(out, "  {:<12}{}", action.column_name(), count)?;
    }
    if entries.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{:<width$}  {:<8}  {}", "Name", "Type", "Action", width = NAME_WIDTH)?;
    for entry in &entries {
        writeln!(
            out,
            "{:<width$}  {:<8}  {}",
            truncate(&entry.display_name(), NAME_WIDTH),
            entry.member_type.to_string(),
            entry.action,
            width = NAME_WIDTH
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let _guard = init_tracing(args.log_file.as_deref())?;
    info!("Rollcall starting");

    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    debug!(?config, "Loaded configuration");

    let people = load_people(&args.input)
        .with_context(|| format!("Could not process {}", args.input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        write_json(&people, &mut out)?;
        writeln!(out)?;
    }

    if args.summary {
        print_summary(&people, &mut out)?;
    }

    if !args.no_files {
        let order = if args.sort_by_absence {
            LedgerOrder::ByAbsence
        } else {
            config.ledger_order
        };
        let out_dir = args.out_dir.clone().unwrap_or_else(|| config.output_dir());
        let files = write_report_files(
            &people,
            &out_dir,
            &config.ledger_file_name,
            &config.outreach_file_name,
            order,
        )
        .with_context(|| format!("Failed to write reports to {}", out_dir.display()))?;

        eprintln!("Ledger:   {} ({} people)", files.ledger.display(), files.people);
        eprintln!("Outreach: {} ({} to contact)", files.outreach.display(), files.outreach_entries);
    }

    info!("Rollcall finished");
    Ok(())
}
