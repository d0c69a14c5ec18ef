use serde::Serialize;
use sqlx::FromRow;

use crate::model::{assignment::AssignmentInfo, user::UserItem};

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub name: String,
}

/// Full view of a course, including its assignments and members
#[derive(Debug, Serialize)]
pub struct CourseInfo {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub assignments: Vec<AssignmentInfo>,
    pub instructors: Vec<UserItem>,
    pub students: Vec<UserItem>,
}

/// Summary of a course, as listed under a user
#[derive(Debug, Serialize)]
pub struct CourseItem {
    pub id: i64,
    pub code: String,
    pub name: String,
}

impl From<Course> for CourseItem {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            code: course.code,
            name: course.name,
        }
    }
}
