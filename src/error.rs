//! Outcomes reported by [`SchoolManager`](crate::manager::SchoolManager) operations that did not
//! succeed. None of them are fatal: the menu prints them and carries on.

use crate::models::{CourseId, StudentId};
use std::fmt;
use thiserror::Error;

/// The record an operation referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Student(StudentId),
    Course(CourseId),
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Student(id) => write!(f, "Student ID {id}"),
            Entity::Course(id) => write!(f, "Course ID {id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchoolError {
    #[error("{0} already exists.")]
    AlreadyExists(Entity),

    #[error("{0} not found.")]
    NotFound(Entity),

    #[error("No {0} available.")]
    NoData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type SchoolResult<T> = Result<T, SchoolError>;
