use crate::{
    database::{Database, StoreError},
    model::{course::Course, role::Role, user::User},
};

impl Database {
    /// Inserts a membership row. A row that already exists, including one
    /// inserted by a concurrent request, yields [`StoreError::AlreadyMember`].
    pub async fn add_to_course(
        &self,
        course_id: i64,
        user_id: i64,
        role: Role,
    ) -> Result<(), StoreError> {
        let mut transaction = self.pool.begin().await?;

        sqlx::query(&format!(
            "INSERT INTO {} (course_id, user_id) VALUES (?, ?);",
            role.join_table()
        ))
        .bind(course_id)
        .bind(user_id)
        .execute(&mut *transaction)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|d| d.is_unique_violation())
            {
                StoreError::AlreadyMember {
                    course_id,
                    user_id,
                    role,
                }
            } else {
                StoreError::from(e)
            }
        })?;

        transaction.commit().await?;
        Ok(())
    }

    pub async fn is_in_course(
        &self,
        course_id: i64,
        user_id: i64,
        role: Role,
    ) -> Result<bool, StoreError> {
        let row = sqlx::query(&format!(
            "SELECT 1 FROM {} WHERE course_id = ? AND user_id = ?;",
            role.join_table()
        ))
        .bind(course_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }

    /// Users holding `role` in the course, in the order they were added
    pub async fn get_course_members(
        &self,
        course_id: i64,
        role: Role,
    ) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT u.id, u.name, u.netid
            FROM users u
            JOIN {} m ON m.user_id = u.id
            WHERE m.course_id = ?
            ORDER BY m.rowid ASC;",
            role.join_table()
        ))
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Courses in which the user holds `role`, in the order they were joined
    pub async fn get_user_courses(&self, user_id: i64, role: Role) -> Result<Vec<Course>, StoreError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT c.id, c.code, c.name
            FROM courses c
            JOIN {} m ON m.course_id = c.id
            WHERE m.user_id = ?
            ORDER BY m.rowid ASC;",
            role.join_table()
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }
}
