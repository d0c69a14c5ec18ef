use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    database::Database,
    endpoints::{USER_NOT_FOUND, find_course, parse_body},
    error::ApiError,
    model::{assignment::AssignmentInfo, course::CourseInfo, role::Role},
};

/// Lists every course in full
pub async fn list_courses(State(db): State<Database>) -> Result<Json<Vec<CourseInfo>>, ApiError> {
    let mut courses = vec![];
    for course in db.get_all_courses().await? {
        courses.push(db.get_course_info(course).await?);
    }

    Ok(Json(courses))
}

pub async fn create_course(
    State(db): State<Database>,
    body: Bytes,
) -> Result<(StatusCode, Json<CourseInfo>), ApiError> {
    let client_req = parse_body(&body)?;
    let Some((code, name)) = client_req.get_new_course() else {
        return Err(ApiError::Validation("Missing class name or code".into()));
    };

    let course = db.create_course(&code, &name).await?;
    tracing::info!("Created course {} ({})", course.id, course.code);

    Ok((StatusCode::CREATED, Json(db.get_course_info(course).await?)))
}

pub async fn get_course(
    State(db): State<Database>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseInfo>, ApiError> {
    let course = find_course(&db, &course_id).await?;
    Ok(Json(db.get_course_info(course).await?))
}

/// Deletes a course and returns the state it was in just before deletion
pub async fn delete_course(
    State(db): State<Database>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseInfo>, ApiError> {
    let course = find_course(&db, &course_id).await?;
    let course_info = db.get_course_info(course).await?;

    db.delete_course(course_info.id).await?;
    tracing::info!("Deleted course {}", course_info.id);

    Ok(Json(course_info))
}

/// Adds a user to a course as a student or instructor.
///
/// A `type` other than "student" or "instructor" changes nothing and still
/// answers 200 with the current course.
pub async fn add_user_to_course(
    State(db): State<Database>,
    Path(course_id): Path<String>,
    body: Bytes,
) -> Result<Json<CourseInfo>, ApiError> {
    let course = find_course(&db, &course_id).await?;

    let client_req = parse_body(&body)?;
    let Some((user_id, user_type)) = client_req.get_membership() else {
        return Err(ApiError::Validation("Missing userid or field".into()));
    };

    let Some(user) = db.get_user(user_id).await? else {
        return Err(ApiError::NotFound(USER_NOT_FOUND.into()));
    };

    match user_type.parse::<Role>() {
        Ok(role) => {
            if db.is_in_course(course.id, user.id, role).await? {
                return Err(ApiError::already_member(role));
            }

            db.add_to_course(course.id, user.id, role).await?;
            tracing::info!("Added user {} to course {} as {}", user.id, course.id, role);
        }
        Err(unknown) => {
            tracing::warn!(
                "Ignoring unrecognized type '{}' when adding user {} to course {}",
                unknown.0,
                user.id,
                course.id
            );
        }
    }

    Ok(Json(db.get_course_info(course).await?))
}

pub async fn add_assignment(
    State(db): State<Database>,
    Path(course_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<AssignmentInfo>), ApiError> {
    let course = find_course(&db, &course_id).await?;

    let client_req = parse_body(&body)?;
    let Some((title, due_date)) = client_req.get_new_assignment() else {
        return Err(ApiError::Validation(
            "Missing title or due date field".into(),
        ));
    };

    let assignment = db.create_assignment(course.id, &title, due_date).await?;
    tracing::info!("Created assignment {} in course {}", assignment.id, course.id);

    Ok((StatusCode::CREATED, Json(assignment.into())))
}
