use school::SchoolManager;
use school::menu::Menu;
use std::io::Cursor;
use std::path::Path;

/// Runs a scripted session and returns everything the menu printed.
fn run_script(manager: &mut SchoolManager, export_path: &Path, lines: &[&str]) -> String {
    let input = Cursor::new(lines.join("\n") + "\n");
    let mut output = Vec::new();

    Menu::new(manager, input, &mut output, export_path)
        .run()
        .unwrap();

    String::from_utf8(output).unwrap()
}

#[test]
fn adds_students_and_courses_then_exits() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("student_details.xlsx");
    let mut manager = SchoolManager::default();

    let output = run_script(
        &mut manager,
        &export_path,
        &[
            "1", "1", "Amy", "15", "F", "a@x.com", "",
            "1", "1", "Amy Again", "15", "F", "b@x.com", "",
            "5", "10", "Math", "Algebra I", "",
            "7", "1", "10", "",
            "6", "",
            "10",
        ],
    );

    assert!(output.contains("Student added successfully."));
    assert!(output.contains("Student ID 1 already exists."));
    assert!(output.contains("Course added successfully."));
    assert!(output.contains("Student enrolled in course successfully."));
    assert!(output.contains("Algebra I"));
    assert!(output.contains("Exiting the system."));

    assert_eq!(manager.num_students(), 1);
    assert_eq!(manager.student(1).unwrap().name, "Amy");
    assert_eq!(manager.enrolled_students(10).unwrap(), &[1]);
}

#[test]
fn non_numeric_id_does_not_end_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = SchoolManager::default();

    let output = run_script(
        &mut manager,
        &dir.path().join("out.xlsx"),
        &[
            "1", "abc", "",
            "1", "2", "Bo", "sixteen", "",
            "1", "2", "Bo", "16", "M", "bo@x.com", "",
            "10",
        ],
    );

    assert!(output.contains("Invalid input: expected a whole number for `student ID`"));
    assert!(output.contains("Invalid input: expected a whole number for `age`"));
    assert!(output.contains("Student added successfully."));
    assert_eq!(manager.num_students(), 1);
}

#[test]
fn update_prompts_only_for_existing_students() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = SchoolManager::default();
    manager.add_student(1, "Amy", 15, "F", "a@x.com").unwrap();

    let output = run_script(
        &mut manager,
        &dir.path().join("out.xlsx"),
        &[
            "2", "9", "",
            "2", "1", "", "16", "", "amy@school.org", "",
            "10",
        ],
    );

    assert!(output.contains("Student ID 9 not found."));
    assert!(output.contains("Student updated successfully."));

    let amy = manager.student(1).unwrap();
    assert_eq!(amy.name, "Amy");
    assert_eq!(amy.age, 16);
    assert_eq!(amy.contact, "amy@school.org");
}

#[test]
fn bad_age_on_update_consumes_every_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = SchoolManager::default();
    manager.add_student(1, "Amy", 15, "F", "a@x.com").unwrap();

    let output = run_script(
        &mut manager,
        &dir.path().join("out.xlsx"),
        &[
            "2", "1", "Amelia", "old", "X", "9", "",
            "5", "10", "Math", "Algebra I", "",
            "10",
        ],
    );

    assert!(output.contains("Invalid input: expected a whole number for `age`"));
    assert!(output.contains("Course added successfully."));
    assert!(!output.contains("Invalid choice."));
    assert!(output.contains("Exiting the system."));

    // The rejected update changed nothing.
    assert_eq!(
        manager.student(1).unwrap(),
        &school::Student::new(1, "Amy", 15, "F", "a@x.com")
    );
    assert_eq!(manager.num_courses(), 1);
}

#[test]
fn view_students_exports_the_roster() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("student_details.xlsx");
    let mut manager = SchoolManager::default();

    let output = run_script(&mut manager, &export_path, &["4", "", "10"]);
    assert!(output.contains("No students available."));
    assert!(!export_path.exists());

    manager.add_student(1, "Amy", 15, "F", "a@x.com").unwrap();
    let output = run_script(&mut manager, &export_path, &["4", "", "10"]);

    assert!(output.contains("Student details saved as"));
    assert!(export_path.exists());
}

#[test]
fn attendance_report_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = SchoolManager::default();

    let output = run_script(
        &mut manager,
        &dir.path().join("out.xlsx"),
        &[
            "9", "1", "",
            "8", "1", "10", "2024-01-10", "Present", "",
            "8", "1", "20", "2024-01-11", "Absent", "",
            "9", "1", "",
            "10",
        ],
    );

    assert!(output.contains("No attendance records for student ID 1 available."));
    assert!(output.contains("Attendance marked successfully."));
    assert!(output.contains("Attendance report for student ID 1:"));
    assert!(output.contains("2024-01-10"));
    assert!(output.contains("2024-01-11"));
    assert!(!output.contains("By course:"));
}

#[test]
fn same_day_courses_show_a_course_breakdown() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = SchoolManager::default();
    manager.mark_attendance(1, 10, "2024-01-10", "Present").unwrap();
    manager.mark_attendance(1, 20, "2024-01-10", "Absent").unwrap();

    let output = run_script(&mut manager, &dir.path().join("out.xlsx"), &["9", "1", "", "10"]);

    assert!(output.contains("By course:"));
}

#[test]
fn unknown_choice_and_end_of_input() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = SchoolManager::default();

    // No "10": the session ends when input runs out.
    let output = run_script(&mut manager, &dir.path().join("out.xlsx"), &["42", ""]);

    assert!(output.contains("Invalid choice. Please try again."));
    assert!(!output.contains("Exiting the system."));
}
