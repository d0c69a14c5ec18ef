use crate::{
    database::{Database, StoreError},
    model::assignment::Assignment,
};

impl Database {
    /// The foreign key on `course_id` rejects assignments for courses that do not exist
    pub async fn create_assignment(
        &self,
        course_id: i64,
        title: &str,
        due_date: i64,
    ) -> Result<Assignment, StoreError> {
        let mut transaction = self.pool.begin().await?;

        let assignment = sqlx::query_as::<_, Assignment>(
            "INSERT INTO assignments (title, due_date, course_id)
            VALUES (?, ?, ?)
            RETURNING id, title, due_date, course_id;",
        )
        .bind(title)
        .bind(due_date)
        .bind(course_id)
        .fetch_one(&mut *transaction)
        .await?;

        transaction.commit().await?;
        Ok(assignment)
    }

    pub async fn get_assignments_for_course(
        &self,
        course_id: i64,
    ) -> Result<Vec<Assignment>, StoreError> {
        let assignments = sqlx::query_as::<_, Assignment>(
            "SELECT id, title, due_date, course_id
            FROM assignments
            WHERE course_id = ?
            ORDER BY id ASC;",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }
}
