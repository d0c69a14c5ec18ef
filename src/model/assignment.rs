use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub due_date: i64,
    pub course_id: i64,
}

#[derive(Debug, Serialize)]
pub struct AssignmentInfo {
    pub id: i64,
    pub title: String,
    pub due_date: i64,
    /// Id of the owning course, not a nested object
    pub course: i64,
}

impl From<Assignment> for AssignmentInfo {
    fn from(assignment: Assignment) -> Self {
        Self {
            id: assignment.id,
            title: assignment.title,
            due_date: assignment.due_date,
            course: assignment.course_id,
        }
    }
}
