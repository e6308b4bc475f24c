//! The numbered console menu that drives a [`SchoolManager`].
//!
//! The loop reads from any [`BufRead`] and writes to any [`Write`], so tests can script a whole
//! session. Running out of input ends the session the same way as choosing "Exit".

use crate::display;
use crate::error::SchoolError;
use crate::export;
use crate::manager::SchoolManager;
use crate::models::StudentUpdate;
use log::error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

const MENU_ITEMS: [&str; 10] = [
    "Add Student",
    "Update Student",
    "Delete Student",
    "View Students",
    "Add Course",
    "View Courses",
    "Enroll Student in Course",
    "Mark Attendance",
    "Generate Attendance Report",
    "Exit",
];

/// Why a menu action did not complete.
#[derive(Debug, Error)]
enum MenuError {
    #[error(transparent)]
    Outcome(#[from] SchoolError),

    #[error("{0:#}")]
    Export(anyhow::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

type Step<T> = Result<T, MenuError>;

/// Whether the loop should keep going after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'a, R, W> {
    manager: &'a mut SchoolManager,
    input: R,
    output: W,
    export_path: PathBuf,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(manager: &'a mut SchoolManager, input: R, output: W, export_path: &Path) -> Self {
        Self {
            manager,
            input,
            output,
            export_path: export_path.to_path_buf(),
        }
    }

    /// Runs the menu until the user exits or input runs out.
    ///
    /// Only I/O failures on the console itself are returned as errors.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;

            let choice = match self.read_line("Choose an option: ") {
                Ok(choice) => choice,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
                Err(err) => return Err(err),
            };

            match self.dispatch(choice.trim()) {
                Ok(Flow::Exit) => {
                    writeln!(self.output, "\t-------- Exiting the system. ---------")?;
                    return Ok(());
                }
                Ok(Flow::Continue) => {}
                Err(MenuError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    return Ok(());
                }
                Err(MenuError::Io(err)) => return Err(err),
                Err(MenuError::Outcome(outcome @ SchoolError::NoData(_))) => {
                    writeln!(self.output, "\n--------- {outcome} ----------\n")?;
                }
                Err(MenuError::Outcome(outcome)) => {
                    writeln!(self.output, "\n********* {outcome} *********\n")?;
                }
                Err(MenuError::Export(err)) => {
                    error!("event=roster_export status=error reason=\"{err:#}\"");
                    writeln!(self.output, "\n********* Export failed: {err:#} *********\n")?;
                }
            }

            match self.pause() {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
                Err(err) => return Err(err),
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "===================================================")?;
        writeln!(self.output, "||\t\tSCHOOL MANAGEMENT SYSTEM \t ||")?;
        writeln!(self.output, "===================================================")?;
        for (number, item) in (1..).zip(MENU_ITEMS) {
            writeln!(self.output, "||\t\t{number}. {item}")?;
        }
        writeln!(self.output, "===================================================")
    }

    fn pause(&mut self) -> io::Result<()> {
        self.read_line("\nPress \"ENTER\" to return to the MAIN MENU...")
            .map(|_| ())
    }

    fn dispatch(&mut self, choice: &str) -> Step<Flow> {
        match choice {
            "1" => self.add_student()?,
            "2" => self.update_student()?,
            "3" => self.delete_student()?,
            "4" => self.view_students()?,
            "5" => self.add_course()?,
            "6" => self.view_courses()?,
            "7" => self.enroll()?,
            "8" => self.mark_attendance()?,
            "9" => self.attendance_report()?,
            "10" => return Ok(Flow::Exit),
            _ => writeln!(self.output, "Invalid choice. Please try again.")?,
        }

        Ok(Flow::Continue)
    }

    fn add_student(&mut self) -> Step<()> {
        let id = self.read_number("\t\tEnter student ID: ", "student ID")?;
        let name = self.read_line("\t\tEnter student name: ")?;
        let age = self.read_number("\t\tEnter student age: ", "age")?;
        let gender = self.read_line("\t\tEnter student gender: ")?;
        let contact = self.read_line("\t\tEnter contact info: ")?;

        self.manager.add_student(id, &name, age, &gender, &contact)?;
        self.success("Student added successfully.")
    }

    fn update_student(&mut self) -> Step<()> {
        let id = self.read_number("\t\tEnter student ID to update: ", "student ID")?;
        // Check before prompting for fields, so a bad ID does not cost four more prompts.
        self.manager.student(id)?;

        writeln!(self.output, "Updating student:")?;
        let name = self.read_line("Enter new name (leave blank to keep current): ")?;
        let age = self.read_line("Enter new age (leave blank to keep current): ")?;
        let gender = self.read_line("Enter new gender (leave blank to keep current): ")?;
        let contact = self.read_line("Enter new contact info (leave blank to keep current): ")?;

        // Every prompt is answered before the age is parsed, so a bad age consumes no later input.
        let age = if age.trim().is_empty() {
            None
        } else {
            Some(parse_number::<i32>(&age, "age")?)
        };

        let update = StudentUpdate {
            name: Some(name),
            age,
            gender: Some(gender),
            contact: Some(contact),
        };
        self.manager.update_student(id, update)?;
        self.success("Student updated successfully.")
    }

    fn delete_student(&mut self) -> Step<()> {
        let id = self.read_number("\t\tEnter student ID to delete: ", "student ID")?;

        self.manager.delete_student(id)?;
        self.success("Student deleted successfully.")
    }

    fn view_students(&mut self) -> Step<()> {
        let students = self.manager.view_students()?;

        writeln!(self.output, "{}", display::students_table(students.clone()))?;
        export::export_students(students, &self.export_path).map_err(MenuError::Export)?;

        let message = format!("Student details saved as '{}'.", self.export_path.display());
        self.success(&message)
    }

    fn add_course(&mut self) -> Step<()> {
        let id = self.read_number("\t\tEnter course ID: ", "course ID")?;
        let name = self.read_line("\t\tEnter course name: ")?;
        let description = self.read_line("\t\tEnter course description: ")?;

        self.manager.add_course(id, &name, &description)?;
        self.success("Course added successfully.")
    }

    fn view_courses(&mut self) -> Step<()> {
        let courses = self.manager.view_courses()?;

        writeln!(self.output, "\n--------- Course Details ----------\n")?;
        writeln!(self.output, "{}", display::courses_table(courses))?;
        writeln!(self.output, "\n--------- End of Course Details ----------\n")?;
        Ok(())
    }

    fn enroll(&mut self) -> Step<()> {
        let student_id = self.read_number("\t\tEnter student ID to enroll: ", "student ID")?;
        let course_id = self.read_number("\t\tEnter course ID: ", "course ID")?;

        self.manager.enroll(student_id, course_id)?;
        self.success("Student enrolled in course successfully.")
    }

    fn mark_attendance(&mut self) -> Step<()> {
        let student_id =
            self.read_number("\t\tEnter student ID for attendance: ", "student ID")?;
        let course_id = self.read_number("\t\tEnter course ID: ", "course ID")?;
        let date = self.read_line("\t\tEnter the date (YYYY-MM-DD): ")?;
        let status = self.read_line("\t\tEnter attendance status (Present/Absent): ")?;

        self.manager.mark_attendance(student_id, course_id, &date, &status)?;
        self.success("Attendance marked successfully.")
    }

    fn attendance_report(&mut self) -> Step<()> {
        let student_id =
            self.read_number("\t\tEnter student ID for attendance report: ", "student ID")?;

        let report = self.manager.attendance_report(student_id)?;
        writeln!(self.output, "\t\tAttendance report for student ID {student_id}:")?;
        writeln!(self.output, "{}", display::report_table(&report))?;

        // The date-keyed report hides same-day entries for other courses; show them in full.
        let records = self.manager.course_attendance_report(student_id)?;
        if records.len() > report.len() {
            writeln!(self.output, "\t\tBy course:")?;
            writeln!(self.output, "{}", display::course_report_table(&records))?;
        }

        Ok(())
    }

    fn success(&mut self, message: &str) -> Step<()> {
        writeln!(self.output, "\n********* {message} *********\n")?;
        Ok(())
    }

    /// Prompts for a line of input and returns it without its line ending.
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input closed",
            ));
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn read_number<T: FromStr>(&mut self, prompt: &str, field: &str) -> Step<T> {
        let line = self.read_line(prompt)?;
        Ok(parse_number(&line, field)?)
    }
}

fn parse_number<T: FromStr>(text: &str, field: &str) -> Result<T, SchoolError> {
    text.trim().parse().map_err(|_| {
        SchoolError::InvalidInput(format!(
            "expected a whole number for `{field}`, got `{}`",
            text.trim()
        ))
    })
}

/// Runs an interactive session on the process's stdin and stdout.
pub fn run_console(manager: &mut SchoolManager, export_path: &Path) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(manager, stdin.lock(), stdout.lock(), export_path).run()
}
