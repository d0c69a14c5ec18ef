use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{database::StoreError, model::role::Role};

/// Body returned by every endpoint on failure
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// The referenced course or user does not exist
    NotFound(String),
    /// A required field is missing, the body cannot be parsed, or the request would duplicate a membership
    Validation(String),
    Internal(String),
}

impl ApiError {
    pub fn already_member(role: Role) -> Self {
        ApiError::Validation(format!("User is already a {role} in this course"))
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::AlreadyMember { role, .. } => ApiError::already_member(role),
            e => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
