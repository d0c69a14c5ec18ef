//! Contains all endpoint handlers, grouped by the entity they operate on.
//!
//! Bodies are read as raw bytes and parsed here, so a malformed body is a 400
//! with the usual error envelope regardless of `Content-Type`.

use crate::{
    database::Database,
    error::ApiError,
    model::{course::Course, request::ClientRequest, user::User},
};

pub mod course;
pub mod user;

const COURSE_NOT_FOUND: &str = "Course not found";
const USER_NOT_FOUND: &str = "User not found";

fn parse_body(body: &[u8]) -> Result<ClientRequest, ApiError> {
    ClientRequest::from_body(body).map_err(|e| {
        tracing::debug!("Rejected request body: {e}");
        ApiError::Validation("Malformed request body".into())
    })
}

/// Path ids that are not integers can never name a row, so they are treated as absent
async fn find_course(db: &Database, course_id: &str) -> Result<Course, ApiError> {
    let Ok(course_id) = course_id.parse::<i64>() else {
        return Err(ApiError::NotFound(COURSE_NOT_FOUND.into()));
    };

    db.get_course(course_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(COURSE_NOT_FOUND.into()))
}

async fn find_user(db: &Database, user_id: &str) -> Result<User, ApiError> {
    let Ok(user_id) = user_id.parse::<i64>() else {
        return Err(ApiError::NotFound(USER_NOT_FOUND.into()));
    };

    db.get_user(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.into()))
}
