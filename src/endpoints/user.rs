use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    database::Database,
    endpoints::{find_user, parse_body},
    error::ApiError,
    model::user::UserInfo,
};

pub async fn create_user(
    State(db): State<Database>,
    body: Bytes,
) -> Result<(StatusCode, Json<UserInfo>), ApiError> {
    let client_req = parse_body(&body)?;
    let Some((name, netid)) = client_req.get_new_user() else {
        return Err(ApiError::Validation("Missing user name or netid".into()));
    };

    let user = db.create_user(&name, &netid).await?;
    tracing::info!("Created user {} ({})", user.id, user.netid);

    Ok((StatusCode::CREATED, Json(db.get_user_info(user).await?)))
}

pub async fn get_user(
    State(db): State<Database>,
    Path(user_id): Path<String>,
) -> Result<Json<UserInfo>, ApiError> {
    let user = find_user(&db, &user_id).await?;
    Ok(Json(db.get_user_info(user).await?))
}
