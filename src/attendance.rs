//! The attendance ledger: a date-indexed history of `(student, course) -> status` entries.
//!
//! Dates keep the order in which they were first marked, and within a date every
//! `(student, course)` key keeps the position of its first mark. Re-marking a key overwrites the
//! status in place.

use crate::models::{CourseId, StudentId};

/// A single attendance entry, as returned by [`AttendanceLedger::course_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub date: String,
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub status: String,
}

/// Every status recorded on a single date.
#[derive(Debug)]
struct DailyData {
    date: String,
    entries: Vec<((StudentId, CourseId), String)>,
}

impl DailyData {
    fn new(date: String) -> Self {
        Self {
            date,
            entries: Vec::new(),
        }
    }

    fn set(&mut self, key: (StudentId, CourseId), status: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = status,
            None => self.entries.push((key, status)),
        }
    }
}

#[derive(Debug, Default)]
pub struct AttendanceLedger {
    days: Vec<DailyData>,
}

impl AttendanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `status` for the `(date, student_id, course_id)` triple, replacing any status
    /// already recorded for it.
    ///
    /// Nothing here checks that the student or course exist.
    pub fn mark(&mut self, student_id: StudentId, course_id: CourseId, date: &str, status: &str) {
        let index = match self.days.iter().position(|day| day.date == date) {
            Some(index) => index,
            None => {
                self.days.push(DailyData::new(date.to_string()));
                self.days.len() - 1
            }
        };

        self.days[index].set((student_id, course_id), status.to_string());
    }

    /// Returns the status recorded for the exact triple, if any.
    pub fn status(&self, date: &str, student_id: StudentId, course_id: CourseId) -> Option<&str> {
        self.days
            .iter()
            .find(|day| day.date == date)?
            .entries
            .iter()
            .find(|(key, _)| *key == (student_id, course_id))
            .map(|(_, status)| status.as_str())
    }

    /// Collects a student's statuses keyed by date alone, in the order the dates were first
    /// marked.
    ///
    /// If the student was marked for several courses on the same date, the entry scanned last for
    /// that date wins and the others are not represented. Use [`Self::course_report`] to keep
    /// every course.
    pub fn report(&self, student_id: StudentId) -> Vec<(String, String)> {
        self.days
            .iter()
            .filter_map(|day| {
                day.entries
                    .iter()
                    .rev()
                    .find(|((student, _), _)| *student == student_id)
                    .map(|(_, status)| (day.date.clone(), status.clone()))
            })
            .collect()
    }

    /// Every record for the given student, in scan order, with the course kept.
    pub fn course_report(&self, student_id: StudentId) -> Vec<AttendanceRecord> {
        self.days
            .iter()
            .flat_map(|day| {
                day.entries
                    .iter()
                    .filter(move |((student, _), _)| *student == student_id)
                    .map(move |((student, course), status)| AttendanceRecord {
                        date: day.date.clone(),
                        student_id: *student,
                        course_id: *course,
                        status: status.clone(),
                    })
            })
            .collect()
    }

    /// The total number of `(date, student, course)` entries.
    pub fn len(&self) -> usize {
        self.days.iter().map(|day| day.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
