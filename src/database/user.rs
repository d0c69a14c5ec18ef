use crate::{
    database::{Database, StoreError},
    model::{
        course::CourseItem,
        role::Role,
        user::{User, UserInfo},
    },
};

impl Database {
    pub async fn create_user(&self, name: &str, netid: &str) -> Result<User, StoreError> {
        let mut transaction = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, netid) VALUES (?, ?)
            RETURNING id, name, netid;",
        )
        .bind(name)
        .bind(netid)
        .fetch_one(&mut *transaction)
        .await?;

        transaction.commit().await?;
        Ok(user)
    }

    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, netid FROM users WHERE id = ?;")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn get_user_info(&self, user: User) -> Result<UserInfo, StoreError> {
        let mut courses = self.get_user_courses(user.id, Role::Instructor).await?;
        courses.extend(self.get_user_courses(user.id, Role::Student).await?);

        Ok(UserInfo {
            id: user.id,
            name: user.name,
            netid: user.netid,
            courses: courses.into_iter().map(CourseItem::from).collect(),
        })
    }
}
