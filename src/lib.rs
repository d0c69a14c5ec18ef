//! A small course-management REST API: courses, users, assignments and
//! course memberships, stored in SQLite and served as JSON over HTTP.

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::database::Database;

pub mod config;
pub mod database;
pub mod endpoints;
pub mod error;
pub mod model;

/// Builds the application router around an already-opened store
pub fn app(db: Database) -> Router {
    // Any origin may call the API with a JSON body
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(AllowOrigin::any());

    Router::new()
        .route(
            "/api/courses/",
            get(endpoints::course::list_courses).post(endpoints::course::create_course),
        )
        .route(
            "/api/courses/{course_id}/",
            get(endpoints::course::get_course).delete(endpoints::course::delete_course),
        )
        .route(
            "/api/courses/{course_id}/add/",
            post(endpoints::course::add_user_to_course),
        )
        .route(
            "/api/courses/{course_id}/assignment/",
            post(endpoints::course::add_assignment),
        )
        .route("/api/users/", post(endpoints::user::create_user))
        .route("/api/users/{user_id}/", get(endpoints::user::get_user))
        .layer(cors)
        .with_state(db)
}
