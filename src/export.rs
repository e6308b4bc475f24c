//! Writes the student roster to a spreadsheet (or CSV) file.

use crate::models::Student;
use anyhow::{Context, Result};
use log::info;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// The file the roster is written to when nothing else is configured.
pub const DEFAULT_EXPORT_PATH: &str = "student_details.xlsx";

/// The header row of every roster file.
pub const ROSTER_HEADERS: [&str; 5] = ["ID", "Name", "Age", "Gender", "Contact"];

/// The largest integer magnitude a spreadsheet number cell holds exactly.
const MAX_EXACT_CELL_INTEGER: i64 = 1 << 53;

/// The file formats a roster can be exported to, picked from the path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Xlsx,
    Csv,
}

impl RosterFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => RosterFormat::Csv,
            _ => RosterFormat::Xlsx,
        }
    }
}

/// Writes one row per student, in iteration order, under the [`ROSTER_HEADERS`] header row.
/// An existing file at `path` is overwritten.
///
/// Returns the number of students written.
pub fn export_students<'a>(
    students: impl IntoIterator<Item = &'a Student>,
    path: &Path,
) -> Result<usize> {
    let written = match RosterFormat::from_path(path) {
        RosterFormat::Xlsx => write_xlsx(students, path)?,
        RosterFormat::Csv => write_csv(students, path)?,
    };

    info!(
        "event=roster_export status=ok rows={written} path={}",
        path.display()
    );
    Ok(written)
}

fn write_xlsx<'a>(students: impl IntoIterator<Item = &'a Student>, path: &Path) -> Result<usize> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let written = fill_worksheet(worksheet, students).context("failed to build roster sheet")?;

    workbook
        .save(path)
        .with_context(|| format!("failed to save roster to {}", path.display()))?;

    Ok(written)
}

fn fill_worksheet<'a>(
    worksheet: &mut Worksheet,
    students: impl IntoIterator<Item = &'a Student>,
) -> Result<usize, rust_xlsxwriter::XlsxError> {
    let bold = Format::new().set_bold();
    for (col, header) in (0u16..).zip(ROSTER_HEADERS) {
        worksheet.write_string_with_format(0, col, header, &bold)?;
    }

    let mut written = 0;
    for (row, student) in (1u32..).zip(students) {
        match exact_cell_number(student.id) {
            Some(id) => worksheet.write_number(row, 0, id)?,
            None => worksheet.write_string(row, 0, student.id.to_string())?,
        };
        worksheet.write_string(row, 1, &student.name)?;
        worksheet.write_number(row, 2, student.age)?;
        worksheet.write_string(row, 3, &student.gender)?;
        worksheet.write_string(row, 4, &student.contact)?;
        written += 1;
    }

    Ok(written)
}

/// Returns `value` as a cell number if the conversion is lossless. Larger IDs are written as
/// text so every digit survives.
fn exact_cell_number(value: i64) -> Option<f64> {
    (value.unsigned_abs() <= MAX_EXACT_CELL_INTEGER as u64).then_some(value as f64)
}

fn write_csv<'a>(students: impl IntoIterator<Item = &'a Student>, path: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let mut written = 0;
    for student in students {
        writer
            .serialize(student)
            .with_context(|| format!("failed to write student {}", student.id))?;
        written += 1;
    }

    // An empty roster still gets its header row.
    if written == 0 {
        writer.write_record(ROSTER_HEADERS)?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_past_exact_float_range_are_not_numbers() {
        assert_eq!(exact_cell_number(42), Some(42.0));
        assert_eq!(exact_cell_number(-(1 << 53)), Some(-9_007_199_254_740_992.0));
        assert_eq!(exact_cell_number((1 << 53) + 1), None);
        assert_eq!(exact_cell_number(i64::MIN), None);
    }

    #[test]
    fn large_ids_still_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("student_details.xlsx");
        let students = [Student::new(i64::MAX, "Big", 15, "F", "")];

        assert_eq!(export_students(&students, &path).unwrap(), 1);
        assert!(path.exists());
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            RosterFormat::from_path(Path::new("student_details.xlsx")),
            RosterFormat::Xlsx
        );
        assert_eq!(
            RosterFormat::from_path(Path::new("out/roster.CSV")),
            RosterFormat::Csv
        );
        assert_eq!(
            RosterFormat::from_path(Path::new("roster")),
            RosterFormat::Xlsx
        );
    }
}
