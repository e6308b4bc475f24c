use crate::attendance::AttendanceRecord;
use crate::models::{Course, Student};
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct StudentRow<'a> {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Age")]
    age: i32,
    #[tabled(rename = "Gender")]
    gender: &'a str,
    #[tabled(rename = "Contact")]
    contact: &'a str,
}

#[derive(Tabled)]
struct CourseRow<'a> {
    #[tabled(rename = "Course ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Description")]
    description: &'a str,
    #[tabled(rename = "Enrolled")]
    enrolled: usize,
}

#[derive(Tabled)]
struct DateStatusRow<'a> {
    #[tabled(rename = "Date")]
    date: &'a str,
    #[tabled(rename = "Status")]
    status: &'a str,
}

#[derive(Tabled)]
struct CourseStatusRow<'a> {
    #[tabled(rename = "Date")]
    date: &'a str,
    #[tabled(rename = "Course ID")]
    course: i64,
    #[tabled(rename = "Status")]
    status: &'a str,
}

fn render<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// Renders the roster as a table, one row per student in the given order.
pub fn students_table<'a>(students: impl IntoIterator<Item = &'a Student>) -> String {
    render(students.into_iter().map(|student| StudentRow {
        id: student.id,
        name: &student.name,
        age: student.age,
        gender: &student.gender,
        contact: &student.contact,
    }))
}

/// Renders the course list. Only the enrollment count is shown, not the enrolled IDs.
pub fn courses_table<'a>(courses: impl IntoIterator<Item = &'a Course>) -> String {
    render(courses.into_iter().map(|course| CourseRow {
        id: course.id,
        name: &course.name,
        description: &course.description,
        enrolled: course.enrolled_students.len(),
    }))
}

/// Renders a date-keyed attendance report, keeping the order of `report`.
pub fn report_table(report: &[(String, String)]) -> String {
    render(report.iter().map(|(date, status)| DateStatusRow { date, status }))
}

/// Renders attendance records with their course.
pub fn course_report_table(records: &[AttendanceRecord]) -> String {
    render(records.iter().map(|record| CourseStatusRow {
        date: &record.date,
        course: record.course_id,
        status: &record.status,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_table_has_export_headers() {
        let students = [Student::new(1, "Amy", 15, "F", "a@x.com")];

        let table = students_table(&students);

        for header in ["ID", "Name", "Age", "Gender", "Contact", "Amy", "a@x.com"] {
            assert!(table.contains(header), "missing {header} in\n{table}");
        }
    }

    #[test]
    fn report_table_lists_every_date() {
        let report = vec![
            ("2024-01-11".to_string(), "Absent".to_string()),
            ("2024-01-10".to_string(), "Present".to_string()),
        ];

        let table = report_table(&report);

        let first = table.find("2024-01-11").unwrap();
        let second = table.find("2024-01-10").unwrap();
        assert!(first < second, "rows were reordered:\n{table}");
        assert!(table.contains("Absent"));
    }
}
