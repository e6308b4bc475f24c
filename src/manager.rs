use crate::attendance::{AttendanceLedger, AttendanceRecord};
use crate::error::{Entity, SchoolError, SchoolResult};
use crate::models::{Course, CourseId, Status, Student, StudentId, StudentUpdate, ValidationMode};
use crate::roster::RecordStore;
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::slice;

/// The format attendance dates are written in.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The manager for recording, modifying, and retrieving school records.
///
/// Every operation checks the records it refers to before writing anything, so a call that
/// returns an error has not changed any state.
#[derive(Debug, Default)]
pub struct SchoolManager {
    records: RecordStore,
    attendance: AttendanceLedger,
    validation: ValidationMode,
}

impl SchoolManager {
    /// Creates an empty `SchoolManager` that checks attendance input according to `validation`.
    pub fn new(validation: ValidationMode) -> Self {
        Self {
            validation,
            ..Self::default()
        }
    }

    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Returns the total number of students on the roster.
    pub fn num_students(&self) -> usize {
        self.records.num_students()
    }

    /// Returns the total number of courses.
    pub fn num_courses(&self) -> usize {
        self.records.num_courses()
    }

    /// Retrieves a specific student based on their ID.
    pub fn student(&self, student_id: StudentId) -> SchoolResult<&Student> {
        self.records
            .student(student_id)
            .ok_or(SchoolError::NotFound(Entity::Student(student_id)))
    }

    /// Retrieves a specific course based on its ID.
    pub fn course(&self, course_id: CourseId) -> SchoolResult<&Course> {
        self.records
            .course(course_id)
            .ok_or(SchoolError::NotFound(Entity::Course(course_id)))
    }

    /// Adds a new student to the roster.
    pub fn add_student(
        &mut self,
        student_id: StudentId,
        name: &str,
        age: i32,
        gender: &str,
        contact: &str,
    ) -> SchoolResult<()> {
        self.insert_student(Student::new(student_id, name, age, gender, contact))
    }

    /// Adds an already-built [`Student`] to the roster.
    pub fn insert_student(&mut self, student: Student) -> SchoolResult<()> {
        let student_id = student.id;
        self.records.insert_student(student).inspect_err(|err| {
            debug!("event=student_add status=rejected id={student_id} reason=\"{err}\"");
        })?;

        info!("event=student_add status=ok id={student_id}");
        Ok(())
    }

    /// Overwrites the provided fields of an existing student.
    pub fn update_student(
        &mut self,
        student_id: StudentId,
        update: StudentUpdate,
    ) -> SchoolResult<()> {
        let Some(student) = self.records.student_mut(student_id) else {
            debug!("event=student_update status=not_found id={student_id}");
            return Err(SchoolError::NotFound(Entity::Student(student_id)));
        };

        update.apply(student);

        info!("event=student_update status=ok id={student_id}");
        Ok(())
    }

    /// Removes and returns a student from the roster given their ID.
    ///
    /// Enrollments and attendance entries that refer to the student are left in place.
    pub fn delete_student(&mut self, student_id: StudentId) -> SchoolResult<Student> {
        let student = self.records.remove_student(student_id).inspect_err(|_| {
            debug!("event=student_delete status=not_found id={student_id}");
        })?;

        info!("event=student_delete status=ok id={student_id}");
        Ok(student)
    }

    /// Iterates over every student in the order they were added.
    ///
    /// Returns [`SchoolError::NoData`] instead of an empty iterator when the roster is empty.
    pub fn view_students(&self) -> SchoolResult<slice::Iter<'_, Student>> {
        if self.records.num_students() == 0 {
            return Err(SchoolError::NoData("students".to_string()));
        }

        Ok(self.records.students())
    }

    /// Adds a new course.
    pub fn add_course(
        &mut self,
        course_id: CourseId,
        name: &str,
        description: &str,
    ) -> SchoolResult<()> {
        self.records
            .insert_course(Course::new(course_id, name, description))
            .inspect_err(|err| {
                debug!("event=course_add status=rejected id={course_id} reason=\"{err}\"");
            })?;

        info!("event=course_add status=ok id={course_id}");
        Ok(())
    }

    /// Iterates over every course in the order they were added.
    ///
    /// Returns [`SchoolError::NoData`] when there are no courses.
    pub fn view_courses(&self) -> SchoolResult<slice::Iter<'_, Course>> {
        if self.records.num_courses() == 0 {
            return Err(SchoolError::NoData("courses".to_string()));
        }

        Ok(self.records.courses())
    }

    /// Enrolls a student in a course. Enrolling the same student twice lists them twice.
    pub fn enroll(&mut self, student_id: StudentId, course_id: CourseId) -> SchoolResult<()> {
        // Both lookups happen before the course is touched.
        self.student(student_id)?;
        let Some(course) = self.records.course_mut(course_id) else {
            debug!("event=enroll status=not_found student={student_id} course={course_id}");
            return Err(SchoolError::NotFound(Entity::Course(course_id)));
        };

        course.enrolled_students.push(student_id);

        info!("event=enroll status=ok student={student_id} course={course_id}");
        Ok(())
    }

    /// Returns the IDs enrolled in a course, in enrollment order.
    pub fn enrolled_students(&self, course_id: CourseId) -> SchoolResult<&[StudentId]> {
        self.course(course_id)
            .map(|course| course.enrolled_students.as_slice())
    }

    /// Marks a student's attendance for a course on a date, replacing any earlier status for the
    /// same date, student, and course.
    ///
    /// The student and course do not have to exist. In [`ValidationMode::Strict`] the date must
    /// be a `YYYY-MM-DD` calendar date and the status must parse as a [`Status`]; both are then
    /// stored in their canonical spelling.
    pub fn mark_attendance(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
        date: &str,
        status: &str,
    ) -> SchoolResult<()> {
        let (date, status) = match self.validation {
            ValidationMode::Lenient => (date.to_string(), status.to_string()),
            ValidationMode::Strict => (parse_date(date)?, parse_status(status)?),
        };

        if self.records.student(student_id).is_none() || self.records.course(course_id).is_none()
        {
            warn!(
                "event=attendance_mark status=unknown_reference student={student_id} course={course_id}"
            );
        }

        self.attendance.mark(student_id, course_id, &date, &status);

        info!(
            "event=attendance_mark status=ok student={student_id} course={course_id} date={date}"
        );
        Ok(())
    }

    /// Returns the status recorded for the exact date, student, and course, if any.
    pub fn attendance_status(
        &self,
        date: &str,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Option<&str> {
        self.attendance.status(date, student_id, course_id)
    }

    /// Retrieves a student's attendance as `(date, status)` pairs, in the order the dates were
    /// first marked.
    ///
    /// Only one status per date is reported even when the student has entries for several
    /// courses on that date; see [`Self::course_attendance_report`].
    pub fn attendance_report(
        &self,
        student_id: StudentId,
    ) -> SchoolResult<Vec<(String, String)>> {
        let report = self.attendance.report(student_id);
        if report.is_empty() {
            return Err(no_attendance(student_id));
        }

        Ok(report)
    }

    /// Retrieves every attendance entry for a student, keeping the course of each.
    pub fn course_attendance_report(
        &self,
        student_id: StudentId,
    ) -> SchoolResult<Vec<AttendanceRecord>> {
        let records = self.attendance.course_report(student_id);
        if records.is_empty() {
            return Err(no_attendance(student_id));
        }

        Ok(records)
    }
}

fn no_attendance(student_id: StudentId) -> SchoolError {
    SchoolError::NoData(format!("attendance records for student ID {student_id}"))
}

fn parse_date(date: &str) -> SchoolResult<String> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .map_err(|err| {
            SchoolError::InvalidInput(format!("`{date}` is not a YYYY-MM-DD date ({err})"))
        })
}

fn parse_status(status: &str) -> SchoolResult<String> {
    status
        .parse::<Status>()
        .map(|status| status.to_string())
        .map_err(SchoolError::InvalidInput)
}
