//! Converts a CSV roster into the spreadsheet written by "View Students".
//!
//! Students are written in the order they appear in the CSV. Rows that repeat an earlier ID are
//! dropped, the same as adding them through the menu would.

use anyhow::Result;
use clap::Parser;
use school::export::{self, DEFAULT_EXPORT_PATH};
use school::{SchoolManager, import, logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Convert a CSV roster into a student_details spreadsheet.")]
struct Args {
    /// The CSV roster to read.
    roster: PathBuf,

    /// The file to write. A `.csv` extension writes CSV instead of XLSX.
    #[arg(short, long, default_value = DEFAULT_EXPORT_PATH)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = logging::init_logging("warn", None)?;

    let mut manager = SchoolManager::default();
    let summary = import::import_roster(&mut manager, &args.roster)?;
    println!("Students read: {}", summary.added);
    if !summary.skipped.is_empty() {
        println!("Duplicate IDs dropped: {:?}", summary.skipped);
    }

    let students = manager.view_students()?;
    let written = export::export_students(students, &args.output)?;
    println!("Wrote {written} students to {}", args.output.display());

    Ok(())
}
