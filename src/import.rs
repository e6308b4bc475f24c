//! Loads students from a CSV roster with an `ID,Name,Age,Gender,Contact` header row.

use crate::error::SchoolError;
use crate::manager::SchoolManager;
use crate::models::{Student, StudentId};
use anyhow::{Context, Result};
use log::{info, warn};
use std::io::Read;
use std::path::Path;

/// What happened to the rows of an imported roster.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    /// IDs that were already on the roster and were left untouched.
    pub skipped: Vec<StudentId>,
}

/// Reads every student out of a CSV roster.
pub fn read_roster(reader: impl Read) -> Result<Vec<Student>> {
    let mut reader = csv::Reader::from_reader(reader);
    reader
        .deserialize::<Student>()
        .enumerate()
        .map(|(i, row)| row.with_context(|| format!("malformed roster row {}", i + 1)))
        .collect()
}

/// Adds every student in the CSV file at `path` to `manager`. Rows whose ID is already taken are
/// skipped, so importing the same file twice is harmless.
pub fn import_roster(manager: &mut SchoolManager, path: &Path) -> Result<ImportSummary> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open roster {}", path.display()))?;
    let students = read_roster(file)?;

    let mut summary = ImportSummary::default();
    for student in students {
        let id = student.id;
        match manager.insert_student(student) {
            Ok(()) => summary.added += 1,
            Err(SchoolError::AlreadyExists(_)) => {
                warn!("event=roster_import status=skipped id={id} reason=duplicate");
                summary.skipped.push(id);
            }
            Err(err) => return Err(err.into()),
        }
    }

    info!(
        "event=roster_import status=ok added={} skipped={} path={}",
        summary.added,
        summary.skipped.len(),
        path.display()
    );
    Ok(summary)
}
