//! The record store: every [`Student`] and [`Course`] known to the school, kept in insertion order.

use crate::error::{Entity, SchoolError, SchoolResult};
use crate::models::{Course, CourseId, Student, StudentId};
use std::slice;

/// Owns the lifetimes of all students and courses.
///
/// Lookups are linear scans; rosters are small and insertion order is what the reports and the
/// spreadsheet export promise.
#[derive(Debug, Default)]
pub struct RecordStore {
    students: Vec<Student>,
    courses: Vec<Course>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_students(&self) -> usize {
        self.students.len()
    }

    pub fn num_courses(&self) -> usize {
        self.courses.len()
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    pub fn student_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.iter_mut().find(|student| student.id == id)
    }

    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    pub fn course_mut(&mut self, id: CourseId) -> Option<&mut Course> {
        self.courses.iter_mut().find(|course| course.id == id)
    }

    /// Inserts a student at the end of the roster, refusing IDs that are already taken.
    pub fn insert_student(&mut self, student: Student) -> SchoolResult<()> {
        if self.student(student.id).is_some() {
            return Err(SchoolError::AlreadyExists(Entity::Student(student.id)));
        }

        self.students.push(student);
        Ok(())
    }

    /// Removes and returns the student with the given ID. The ID may be reused afterwards.
    pub fn remove_student(&mut self, id: StudentId) -> SchoolResult<Student> {
        let index = self
            .students
            .iter()
            .position(|student| student.id == id)
            .ok_or(SchoolError::NotFound(Entity::Student(id)))?;

        // `remove` rather than `swap_remove` so the remaining students keep their order.
        Ok(self.students.remove(index))
    }

    /// Inserts a course at the end of the course list, refusing IDs that are already taken.
    pub fn insert_course(&mut self, course: Course) -> SchoolResult<()> {
        if self.course(course.id).is_some() {
            return Err(SchoolError::AlreadyExists(Entity::Course(course.id)));
        }

        self.courses.push(course);
        Ok(())
    }

    /// Iterates over all students in insertion order. The iterator is cheap to clone, so a
    /// caller can walk the roster more than once.
    pub fn students(&self) -> slice::Iter<'_, Student> {
        self.students.iter()
    }

    /// Iterates over all courses in insertion order.
    pub fn courses(&self) -> slice::Iter<'_, Course> {
        self.courses.iter()
    }
}
