use serde::Serialize;
use sqlx::FromRow;

use crate::model::course::CourseItem;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub netid: String,
}

/// Full view of a user. `courses` lists teaching courses first, then enrolled ones.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub netid: String,
    pub courses: Vec<CourseItem>,
}

#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: i64,
    pub name: String,
    pub netid: String,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            netid: user.netid,
        }
    }
}
