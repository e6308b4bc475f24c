use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type StudentId = i64;
pub type CourseId = i64;

/// A student on the school roster.
///
/// The serde field names double as the header row of exported and imported roster files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "ID")]
    pub id: StudentId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: i32,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Contact")]
    pub contact: String,
}

impl Student {
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        age: i32,
        gender: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
            contact: contact.into(),
        }
    }
}

/// A course and the students enrolled in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub description: String,
    /// Enrolled student IDs in enrollment order. The same student may appear more than once.
    pub enrolled_students: Vec<StudentId>,
}

impl Course {
    pub fn new(id: CourseId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            enrolled_students: Vec::new(),
        }
    }
}

/// A partial update to a [`Student`]. Fields left as `None` (or set to empty text) keep their
/// current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub contact: Option<String>,
}

impl StudentUpdate {
    /// Overwrites every provided, non-empty field of `student`.
    pub fn apply(self, student: &mut Student) {
        fn overwrite(field: &mut String, value: Option<String>) {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                *field = value;
            }
        }

        overwrite(&mut student.name, self.name);
        overwrite(&mut student.gender, self.gender);
        overwrite(&mut student.contact, self.contact);
        if let Some(age) = self.age {
            student.age = age;
        }
    }
}

/// The attendance status of a student for a single class meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Present,
    Absent,
    Excused,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            Status::Present => "Present",
            Status::Absent => "Absent",
            Status::Excused => "Excused",
        };
        f.write_str(status)
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "present" => Ok(Status::Present),
            "absent" => Ok(Status::Absent),
            "excused" => Ok(Status::Excused),
            other => Err(format!(
                "unknown attendance status `{other}`; expected Present, Absent or Excused"
            )),
        }
    }
}

/// How strictly attendance dates and statuses are checked before they are recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Dates and statuses are stored verbatim.
    #[default]
    Lenient,
    /// Dates must be `YYYY-MM-DD` calendar dates and statuses must parse as a [`Status`].
    Strict,
}
